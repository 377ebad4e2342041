use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarNeighboursError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("GitHub query failed: {0}")]
    QueryFailure(String),

    #[error("Authentication error: {0}")]
    AuthFailure(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification the web layer maps to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    QueryFailure,
    AuthFailure,
    Internal,
}

impl StarNeighboursError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StarNeighboursError::NotFound(_) => ErrorKind::NotFound,
            StarNeighboursError::AuthFailure(_) => ErrorKind::AuthFailure,
            StarNeighboursError::QueryFailure(_)
            | StarNeighboursError::Network(_)
            | StarNeighboursError::Json(_) => ErrorKind::QueryFailure,
            StarNeighboursError::Io(_) | StarNeighboursError::Config(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, StarNeighboursError>;
