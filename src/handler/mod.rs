//! Request handler module
//!
//! Identity forwarding to the wrapped application, the ordered route
//! table, and sandboxed static file serving.

pub mod adapter;
pub mod router;
pub mod static_files;
