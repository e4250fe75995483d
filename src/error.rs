// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocstampError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, DocstampError>;

// Allow `?` on std::io::Error by converting to DocstampError::Io with unknown path.
impl From<std::io::Error> for DocstampError {
    fn from(source: std::io::Error) -> Self {
        DocstampError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
