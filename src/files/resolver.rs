//! Request path to file mapping
//!
//! The request path is appended verbatim to the configured root, so with
//! the default root `.` a request for `/a/b.css` reads `./a/b.css`. No
//! normalization happens: `..` segments are passed straight to the
//! filesystem and can reach outside the root unless `confine_to_root` is
//! enabled. Path bytes need not be UTF-8.

use bytes::Bytes;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::StaticFilesConfig;
use crate::http::request::Request;

/// Any failure to produce file content.
///
/// Missing files, permission problems, directories and paths rejected by
/// root confinement all end up here alike.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A file read from disk for one request.
#[derive(Debug, Clone)]
pub struct ResolvedFile {
    /// Filesystem path the content was read from
    pub path: PathBuf,
    pub content: Bytes,
}

#[derive(Debug, Clone)]
pub struct FileResolver {
    config: StaticFilesConfig,
}

impl FileResolver {
    pub fn new(config: StaticFilesConfig) -> Self {
        Self { config }
    }

    /// Filesystem path for a request. `/` maps to the index document.
    pub fn resolve_path(&self, req: &Request) -> PathBuf {
        let mut raw = self.config.root.clone().into_bytes();
        if req.is_root() {
            raw.push(b'/');
            raw.extend_from_slice(self.config.index.as_bytes());
        } else {
            raw.extend_from_slice(&req.path);
        }
        path_from_bytes(raw)
    }

    /// Resolves and reads the file behind the request path.
    pub async fn load(&self, req: &Request) -> Result<ResolvedFile, ResolveError> {
        let path = self.resolve_path(req);

        let not_found = |source: io::Error| ResolveError::FileNotFound {
            path: path.clone(),
            source,
        };

        if self.config.confine_to_root {
            self.check_confined(&path).await.map_err(not_found)?;
        }

        let content = tokio::fs::read(&path).await.map_err(not_found)?;

        Ok(ResolvedFile {
            path,
            content: Bytes::from(content),
        })
    }

    async fn check_confined(&self, path: &Path) -> io::Result<()> {
        let root = tokio::fs::canonicalize(&self.config.root).await?;
        let target = tokio::fs::canonicalize(path).await?;

        if target.starts_with(&root) {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "path escapes the static root",
            ))
        }
    }
}

#[cfg(unix)]
fn path_from_bytes(raw: Vec<u8>) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    PathBuf::from(OsString::from_vec(raw))
}

// Non-unix paths cannot hold arbitrary bytes.
#[cfg(not(unix))]
fn path_from_bytes(raw: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&raw).into_owned())
}
