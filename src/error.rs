use crate::clipboard::ClipboardError;
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreexportError {
    #[error("directory '{0}' does not exist")]
    RootNotFound(PathBuf),
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}
impl TreexportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreexportError::Io {
            path: path.into(),
            source,
        }
    }
}
