/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules (date ranges, config floors)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network-level failures talking to the EcoDeli backend
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error envelope returned by a backend procedure
    #[error("RPC error {code}: {message}")]
    Rpc { message: String, code: i64 },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors while writing report output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report font assets missing or unreadable
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// PDF rendering failures
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn rpc(message: impl Into<String>, code: i64) -> Self {
        AppError::Rpc {
            message: message.into(),
            code,
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        AppError::Render(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// Whether this error should trigger the mock-data fallback instead of
    /// surfacing to the caller
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::Transport(_) | AppError::Rpc { .. } | AppError::Json(_)
        )
    }
}
