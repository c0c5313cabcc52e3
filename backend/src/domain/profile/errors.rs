//! Profile and wishlist error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Profile-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Session key on a wishlist request does not resolve.
    SessionNotFound(String),
    /// The session is already on the wishlist.
    AlreadyInWishlist,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ProfileError {
    pub fn session_not_found(key: impl Into<String>) -> Self {
        ProfileError::SessionNotFound(key.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProfileError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProfileError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            ProfileError::AlreadyInWishlist => ErrorCode::AlreadyInWishlist,
            ProfileError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProfileError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ProfileError::SessionNotFound(key) => {
                format!("No session found with key: {}", key)
            }
            ProfileError::AlreadyInWishlist => {
                "You have already added this session to your wish list".to_string()
            }
            ProfileError::ValidationFailed { message, .. } => message.clone(),
            ProfileError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProfileError {}

impl From<DomainError> for ProfileError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionNotFound => {
                ProfileError::SessionNotFound(err.details.get("key").cloned().unwrap_or(err.message))
            }
            ErrorCode::AlreadyInWishlist => ProfileError::AlreadyInWishlist,
            ErrorCode::ValidationFailed => ProfileError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            _ => ProfileError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for ProfileError {
    fn from(err: ValidationError) -> Self {
        ProfileError::validation(err.field().to_string(), err.to_string())
    }
}
