//! Error Types
//!
//! Every variant's `Display` is the message shown to the user.

use thiserror::Error;

/// Fallback when an error body carries no usable message
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("{message}")]
    Http { status: u16, message: String },
    /// No response at all (fetch rejected)
    #[error("Network error: {0}")]
    Network(String),
    /// 2xx response whose body did not match the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to write {key} to browser storage")]
    Write { key: String },
    #[error("failed to serialize session: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Rejected before any network call
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type AppResult<T> = Result<T, AppError>;
