//! Error types for Prompt Universe

use thiserror::Error;

/// Result type alias for Prompt Universe operations
pub type UniverseResult<T> = Result<T, UniverseError>;

/// Main error type for Prompt Universe
#[derive(Error, Debug, Clone)]
pub enum UniverseError {
    /// Malformed input caught by schema checks before any side effect
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced document or connection does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Document store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Prompt template rendering errors
    #[error("Template error: {0}")]
    Template(String),

    /// Generation API execution errors
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl UniverseError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new not-found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a new store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Create a new template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }

    /// Create a new execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<anyhow::Error> for UniverseError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<std::io::Error> for UniverseError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for UniverseError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<reqwest::Error> for UniverseError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}
