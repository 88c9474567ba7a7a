//! Deployment gateway for a wrapped HTTP application.
//!
//! Exposes an externally-defined request handler as a callable the hosting
//! runtime invokes per request, and serves static assets under `/static/`.
//! Everything else about the wrapped application is opaque to this crate.

pub mod config;
pub mod gateway;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use gateway::Gateway;
pub use handler::adapter::{AppFuture, Application, BoxError};
pub use handler::static_files::StaticDir;
