//! Request adapter module
//!
//! Identity forwarding to the wrapped application. The adapter reads no
//! request fields and constructs no response fields; application faults
//! propagate unchanged to the host runtime.

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed error type used at the service boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Future returned by the wrapped application's handler.
pub type AppFuture = Pin<Box<dyn Future<Output = Result<Response<Full<Bytes>>, BoxError>> + Send>>;

/// The wrapped application's single entry point.
///
/// The body type is generic so the contract can be exercised without a live
/// connection; the server edge uses `hyper::body::Incoming`.
pub trait Application<B = Incoming>: Send + Sync {
    fn handle(&self, req: Request<B>) -> AppFuture;
}

impl<B, F, Fut> Application<B> for F
where
    F: Fn(Request<B>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response<Full<Bytes>>, BoxError>> + Send + 'static,
{
    fn handle(&self, req: Request<B>) -> AppFuture {
        Box::pin(self(req))
    }
}

/// Forwards requests to the wrapped application, verbatim.
///
/// The application reference is injected at construction; there is no
/// process-global application instance.
pub struct AppAdapter<B = Incoming> {
    app: Arc<dyn Application<B>>,
}

impl<B> AppAdapter<B> {
    pub fn new(app: Arc<dyn Application<B>>) -> Self {
        Self { app }
    }

    /// Pure pass-through: no transformation, no validation, no logging,
    /// no fault recovery or translation.
    pub fn forward(&self, req: Request<B>) -> AppFuture {
        self.app.handle(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn marked_app(calls: Arc<AtomicUsize>) -> impl Application<()> {
        move |_req: Request<()>| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                let resp = Response::builder()
                    .status(418)
                    .header("x-app", "quiz")
                    .body(Full::new(Bytes::from("from-app")))
                    .unwrap();
                Ok::<_, BoxError>(resp)
            }
        }
    }

    #[tokio::test]
    async fn forward_returns_application_response_verbatim() {
        let calls = Arc::new(AtomicUsize::new(0));
        let adapter: AppAdapter<()> = AppAdapter::new(Arc::new(marked_app(Arc::clone(&calls))));

        let req = Request::builder()
            .method("POST")
            .uri("/api/anything")
            .body(())
            .unwrap();
        let resp = adapter.forward(req).await.unwrap();

        assert_eq!(resp.status(), 418);
        assert_eq!(resp.headers().get("x-app").unwrap(), "quiz");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn forward_propagates_application_faults_unchanged() {
        let adapter: AppAdapter<()> = AppAdapter::new(Arc::new(|_req: Request<()>| async {
            Err::<Response<Full<Bytes>>, BoxError>("quiz backend exploded".into())
        }));

        let req = Request::builder().uri("/api/boom").body(()).unwrap();
        let err = adapter.forward(req).await.unwrap_err();
        assert_eq!(err.to_string(), "quiz backend exploded");
    }
}
