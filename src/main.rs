//! Local development entry point.
//!
//! Binds a standalone listener and routes every request through the same
//! gateway the hosting runtime invokes in deployment. Not used when
//! deployed; a real deployment constructs `Gateway` around its own
//! application through the library.

use app_gateway::handler::adapter::{Application, BoxError};
use app_gateway::{config, http, logger, server, Gateway};
use hyper::body::Incoming;
use hyper::Request;
use std::sync::Arc;

fn main() -> Result<(), BoxError> {
    let settings = config::Settings::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(settings))
}

async fn async_main(settings: config::Settings) -> Result<(), BoxError> {
    let addr = settings.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let app: Arc<dyn Application> = Arc::new(placeholder_application);
    let gateway = Arc::new(Gateway::new(app)?.access_log(settings.logging.access_log));

    logger::log_server_start(&addr, &settings);
    server::run(listener, gateway).await
}

/// Stand-in wrapped application for interactive runs. Deployments replace
/// this with the real handler at `Gateway` construction.
fn placeholder_application(req: Request<Incoming>) -> app_gateway::AppFuture {
    let path = req.uri().path().to_owned();
    Box::pin(async move {
        Ok(http::build_text_response(format!(
            "app-gateway development server\nno wrapped application is attached; requested: {path}\n"
        )))
    })
}
