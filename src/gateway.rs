//! Deployment gateway
//!
//! The callable the hosting runtime invokes per request. Dispatches
//! through the ordered route table: static assets under `/static/`,
//! everything else forwarded verbatim to the wrapped application.

use crate::handler::adapter::{AppAdapter, Application, BoxError};
use crate::handler::router::{self, Route, RouteTarget};
use crate::handler::static_files::StaticDir;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response};
use std::io;
use std::sync::Arc;

pub struct Gateway<B = Incoming> {
    adapter: AppAdapter<B>,
    assets: StaticDir,
    routes: Vec<Route>,
    access_log: bool,
}

impl<B> Gateway<B> {
    /// Build a gateway around the wrapped application, with the asset root
    /// derived from the running executable's own directory.
    pub fn new(app: Arc<dyn Application<B>>) -> io::Result<Self> {
        Ok(Self::with_assets(app, StaticDir::from_exe_dir()?))
    }

    /// Build a gateway with an explicit asset root.
    pub fn with_assets(app: Arc<dyn Application<B>>, assets: StaticDir) -> Self {
        Self {
            adapter: AppAdapter::new(app),
            assets,
            routes: router::route_table(),
            access_log: false,
        }
    }

    #[must_use]
    pub const fn access_log(mut self, enabled: bool) -> Self {
        self.access_log = enabled;
        self
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.access_log
    }

    /// Handle one request.
    ///
    /// Static hits never fail; application responses and faults pass
    /// through unchanged.
    pub async fn handle(&self, req: Request<B>) -> Result<Response<Full<Bytes>>, BoxError> {
        if self.access_log {
            logger::log_request(req.method(), req.uri());
        }

        let matched = router::match_route(&self.routes, req.method(), req.uri().path())
            .map(|m| (m.target, m.rest.to_owned()));
        match matched {
            Some((RouteTarget::StaticAssets, requested)) => {
                let resp = self.assets.serve(&requested).await;
                if self.access_log {
                    logger::log_response(resp.status().as_u16());
                }
                Ok(resp)
            }
            // The table ends with a catch-all, so anything else belongs to
            // the wrapped application.
            _ => self.adapter.forward(req).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_gateway(calls: Arc<AtomicUsize>) -> (tempfile::TempDir, Gateway<()>) {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("static");
        std::fs::create_dir_all(root.join("css")).unwrap();
        std::fs::write(root.join("css/style.css"), b"body{}\n").unwrap();
        std::fs::write(outer.path().join("secrets.txt"), b"top secret").unwrap();

        let app = move |_req: Request<()>| {
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
        };
        let gateway = Gateway::with_assets(Arc::new(app), StaticDir::new(root));
        (outer, gateway)
    }

    fn request(method: &str, uri: &str) -> Request<()> {
        Request::builder().method(method).uri(uri).body(()).unwrap()
    }

    #[tokio::test]
    async fn static_route_serves_without_touching_the_application() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (_outer, gateway) = test_gateway(Arc::clone(&calls));

        let resp = gateway.handle(request("GET", "/static/css/style.css")).await.unwrap();
        assert_eq!(resp.status(), 200);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body.as_ref(), b"body{}\n");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn traversal_through_the_static_route_is_an_empty_404() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (_outer, gateway) = test_gateway(calls);

        let resp = gateway
            .handle(request("GET", "/static/../secrets.txt"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn other_paths_pass_through_to_the_application() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (_outer, gateway) = test_gateway(Arc::clone(&calls));

        let resp = gateway.handle(request("POST", "/api/anything")).await.unwrap();
        assert_eq!(resp.status(), 418);
        assert_eq!(resp.headers().get("x-app").unwrap(), "quiz");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body.as_ref(), b"from-app");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn application_faults_propagate_unchanged() {
        let outer = tempfile::tempdir().unwrap();
        let app = |_req: Request<()>| async {
            Err::<Response<Full<Bytes>>, BoxError>("quiz backend exploded".into())
        };
        let gateway: Gateway<()> =
            Gateway::with_assets(Arc::new(app), StaticDir::new(outer.path().join("static")));

        let err = gateway.handle(request("GET", "/quiz/7")).await.unwrap_err();
        assert_eq!(err.to_string(), "quiz backend exploded");
    }
}
