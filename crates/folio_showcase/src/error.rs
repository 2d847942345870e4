//! Error types for folio_showcase

use thiserror::Error;

/// Errors that can occur when loading showcase content
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// Failed to parse project data
    #[error("Project data parsing failed: {0}")]
    ProjectData(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for ShowcaseError {
    fn from(err: anyhow::Error) -> Self {
        ShowcaseError::Other(err.to_string())
    }
}

/// Result type for folio_showcase operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;
