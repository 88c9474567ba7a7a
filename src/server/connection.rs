//! Per-connection handling for the local development server.

use crate::gateway::Gateway;
use crate::handler::adapter::BoxError;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpStream;

/// Named service body so the error type is pinned to a concrete
/// `'static` signature; an inline async closure leaves the boxed error's
/// lifetime higher-ranked and fails to type-check under `service_fn`.
async fn serve(
    gateway: Arc<Gateway>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, BoxError> {
    gateway.handle(req).await
}

/// Serve one HTTP/1.1 connection through the gateway in a spawned task.
///
/// Connection-level and application faults are logged here, never turned
/// into synthesized responses.
pub fn handle_connection(stream: TcpStream, gateway: Arc<Gateway>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service_fn(move |req| serve(Arc::clone(&gateway), req)));

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
