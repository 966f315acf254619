//! Structured error types for flowgrid.
//!
//! Geometry computation itself never fails — malformed delegate answers
//! degrade to a clamped layout instead. Errors exist only at the host input
//! boundary (JSON scenes, file I/O in the CLI).

/// All errors that can occur at the flowgrid input boundary.
#[derive(Debug, thiserror::Error)]
pub enum FlowgridError {
    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid grid content (non-finite dimensions and the like).
    #[error("Invalid content: {0}")]
    Content(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlowgridError>;

impl From<String> for FlowgridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for FlowgridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}
