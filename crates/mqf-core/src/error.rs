use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised while scanning or rewriting.
///
/// `RootNotFound` aborts a run; every other variant is scoped to one file and
/// its message leaves the path out, since the report line already names it.
#[derive(Error, Debug)]
pub enum FixError {
    #[error("directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("read failed: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("not valid UTF-8: {source}")]
    Decode { path: PathBuf, source: FromUtf8Error },
    #[error("write failed: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl FixError {
    pub fn path(&self) -> &Path {
        match self {
            Self::RootNotFound(path) => path,
            Self::Read { path, .. } | Self::Decode { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
