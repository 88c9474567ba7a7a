//! Static file serving module
//!
//! Resolves untrusted asset paths against a fixed root and serves file
//! bytes with an inferred content type. The containment check is lexical
//! and runs before any filesystem access.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Fixed subdirectory name the asset root is derived from.
const STATIC_SUBDIR: &str = "static";

/// The sandboxed directory public assets are served from.
///
/// Computed once at process start and never mutated.
pub struct StaticDir {
    root: PathBuf,
}

impl StaticDir {
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Asset root next to the running executable: `<exe dir>/static`.
    ///
    /// Derived from the program's own location, never from configuration.
    pub fn from_exe_dir() -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory")
        })?;
        Ok(Self::new(dir.join(STATIC_SUBDIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lexically resolve a client-supplied relative path against the root.
    ///
    /// `.` segments are dropped and `..` pops the previously pushed segment.
    /// Returns `None` when the path is absolute or would climb above the
    /// root, so a traversal attempt is rejected before any read is
    /// attempted.
    fn resolve(&self, requested: &str) -> Option<PathBuf> {
        let mut resolved = self.root.clone();
        let mut depth = 0usize;

        for component in Path::new(requested).components() {
            match component {
                Component::Normal(segment) => {
                    resolved.push(segment);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    if depth == 0 {
                        return None;
                    }
                    resolved.pop();
                    depth -= 1;
                }
                Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        Some(resolved)
    }

    /// Serve one asset. Traversal rejection, a missing file, and a
    /// non-regular file all collapse to the same empty 404 so the response
    /// reveals nothing about the filesystem.
    pub async fn serve(&self, requested: &str) -> Response<Full<Bytes>> {
        // URL paths arrive percent-encoded; file names on disk are not.
        let Ok(decoded) = percent_decode_str(requested).decode_utf8() else {
            return http::build_404_response();
        };

        let Some(file_path) = self.resolve(&decoded) else {
            logger::log_warning(&format!("Path traversal attempt blocked: {requested}"));
            return http::build_404_response();
        };

        match fs::metadata(&file_path).await {
            Ok(meta) if meta.is_file() => {}
            // Missing, a directory, or anything else non-regular
            _ => return http::build_404_response(),
        }

        match fs::read(&file_path).await {
            Ok(content) => {
                let content_type =
                    mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
                http::build_file_response(content, content_type)
            }
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to read file '{}': {e}",
                    file_path.display()
                ));
                http::build_404_response()
            }
        }
    }
}
