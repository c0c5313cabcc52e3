//! Conference-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::FilterError;

/// Conference-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConferenceError {
    /// Conference key did not resolve.
    NotFound(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// The user is already on the attendee list.
    AlreadyRegistered,
    /// No seats left.
    NoSeatsAvailable,
    /// Infrastructure error.
    Infrastructure(String),
}

impl ConferenceError {
    pub fn not_found(key: impl Into<String>) -> Self {
        ConferenceError::NotFound(key.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConferenceError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ConferenceError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ConferenceError::NotFound(_) => ErrorCode::ConferenceNotFound,
            ConferenceError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ConferenceError::AlreadyRegistered => ErrorCode::AlreadyRegistered,
            ConferenceError::NoSeatsAvailable => ErrorCode::NoSeatsAvailable,
            ConferenceError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ConferenceError::NotFound(key) => format!("No conference found with key: {}", key),
            ConferenceError::ValidationFailed { message, .. } => message.clone(),
            ConferenceError::AlreadyRegistered => {
                "You have already registered for this conference".to_string()
            }
            ConferenceError::NoSeatsAvailable => "There are no seats available.".to_string(),
            ConferenceError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ConferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConferenceError {}

impl From<DomainError> for ConferenceError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ConferenceNotFound => {
                ConferenceError::NotFound(err.details.get("key").cloned().unwrap_or(err.message))
            }
            ErrorCode::AlreadyRegistered => ConferenceError::AlreadyRegistered,
            ErrorCode::NoSeatsAvailable => ConferenceError::NoSeatsAvailable,
            ErrorCode::ValidationFailed | ErrorCode::InvalidFilter => {
                ConferenceError::ValidationFailed {
                    field: err.details.get("field").cloned().unwrap_or_default(),
                    message: err.message,
                }
            }
            _ => ConferenceError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for ConferenceError {
    fn from(err: ValidationError) -> Self {
        ConferenceError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<FilterError> for ConferenceError {
    fn from(err: FilterError) -> Self {
        ConferenceError::validation("filters", err.to_string())
    }
}

impl From<ConferenceError> for DomainError {
    fn from(err: ConferenceError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            ConferenceError::NotFound(key) => domain.with_detail("key", key),
            ConferenceError::ValidationFailed { field, .. } => domain.with_detail("field", field),
            _ => domain,
        }
    }
}
