//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session key did not resolve.
    NotFound(String),
    /// Parent conference key did not resolve.
    ConferenceNotFound(String),
    /// Caller does not organize the parent conference.
    NotOrganizer,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(key: impl Into<String>) -> Self {
        SessionError::NotFound(key.into())
    }
    pub fn conference_not_found(key: impl Into<String>) -> Self {
        SessionError::ConferenceNotFound(key.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::ConferenceNotFound(_) => ErrorCode::ConferenceNotFound,
            SessionError::NotOrganizer => ErrorCode::NotOrganizer,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(key) => format!("No session found with key: {}", key),
            SessionError::ConferenceNotFound(key) => {
                format!("No conference found with key: {}", key)
            }
            SessionError::NotOrganizer => "Unauthorised to create this session".to_string(),
            SessionError::ValidationFailed { message, .. } => message.clone(),
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionNotFound => {
                SessionError::NotFound(err.details.get("key").cloned().unwrap_or(err.message))
            }
            ErrorCode::ConferenceNotFound => SessionError::ConferenceNotFound(
                err.details.get("key").cloned().unwrap_or(err.message),
            ),
            ErrorCode::NotOrganizer => SessionError::NotOrganizer,
            ErrorCode::ValidationFailed => SessionError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::validation(err.field().to_string(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_organizer_is_a_conflict_code() {
        assert_eq!(SessionError::NotOrganizer.code(), ErrorCode::NotOrganizer);
        assert_eq!(
            SessionError::NotOrganizer.to_string(),
            "Unauthorised to create this session"
        );
    }

    #[test]
    fn cache_failures_map_to_infrastructure() {
        let err: SessionError = DomainError::new(ErrorCode::CacheError, "redis down").into();
        assert!(matches!(err, SessionError::Infrastructure(_)));
    }
}
