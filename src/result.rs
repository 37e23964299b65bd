use thiserror::Error;

/// Main error type for the sqlexplainer library
#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unterminated quoted text starting at offset {0}")]
    UnterminatedQuote(usize),
    #[error("Unterminated block comment starting at offset {0}")]
    UnterminatedComment(usize),
    #[error("Settings type mismatch: expected {expected}, got {got}")]
    SettingsTypeMismatch { expected: String, got: String },
}

/// Type alias for Results using ExplainError
pub type Result<T> = std::result::Result<T, ExplainError>;
