use quizboard_core::GameDescription;

/// Errors from fetching a single remote image.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing a third-party HTML export.
#[derive(Debug, thiserror::Error)]
pub enum HtmlImportError {
    #[error("failed to read export file: {0}")]
    Io(#[from] std::io::Error),

    /// A grid cell references a category that is not a column header.
    /// This violates the structural assumption the whole parse rests on,
    /// so the parse stops; `partial` holds what was built up to the
    /// mismatched cell.
    #[error("cell references unknown category '{category}'")]
    CategoryMismatch {
        category: String,
        partial: Box<GameDescription>,
    },
}
