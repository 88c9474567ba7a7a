//! HTTP protocol layer module
//!
//! Content-type inference and response builders, decoupled from routing
//! and the wrapped application.

pub mod mime;
pub mod response;

pub use response::{build_404_response, build_file_response, build_text_response};
