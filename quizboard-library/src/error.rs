use std::path::PathBuf;

/// Errors from library store operations.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bundle {} contains no manifest file", bundle.display())]
    MissingManifest { bundle: PathBuf },
}
