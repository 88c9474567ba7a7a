//! Logger module
//!
//! Stdout/stderr logging for the gateway: server lifecycle, access log
//! lines with a common-log timestamp, warnings and errors.

use crate::config::Settings;
use chrono::Local;
use hyper::{Method, Uri};
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, settings: &Settings) {
    println!("======================================");
    println!("Gateway development server started");
    println!("Listening on: http://{addr}");
    println!("Access log: {}", settings.logging.access_log);
    println!("Static assets served under /static/");
    println!("All other requests go to the wrapped application");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!("[{}] \"{method} {uri}\"", timestamp());
}

pub fn log_response(status: u16) {
    println!("[{}] -> {status}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
