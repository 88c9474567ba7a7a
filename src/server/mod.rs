//! Local development server
//!
//! Accept loop, listener setup, and per-connection HTTP/1 serving for the
//! interactive run mode. Deployments invoke the gateway directly and never
//! touch this module.

pub mod connection;
pub mod listener;

pub use listener::create_reusable_listener;

use crate::gateway::Gateway;
use crate::handler::adapter::BoxError;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections forever, serving each through the gateway.
pub async fn run(listener: TcpListener, gateway: Arc<Gateway>) -> Result<(), BoxError> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if gateway.access_log_enabled() {
                    logger::log_connection_accepted(&peer_addr);
                }
                connection::handle_connection(stream, Arc::clone(&gateway));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
