use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Download failed: {url}")]
    Download { url: String },

    #[error("Extraction failed: {path:?}")]
    Extraction { path: PathBuf },

    #[error("Part {part} not found (manifest has {total} parts)")]
    PartNotFound { part: usize, total: usize },

    #[error("Manifest error: {message}")]
    Manifest { message: String },

    #[error("Permission denied: {path:?}")]
    PermissionDenied { path: PathBuf },
}

impl FetchError {
    pub fn manifest_error<S: Into<String>>(message: S) -> Self {
        FetchError::Manifest {
            message: message.into(),
        }
    }
}
