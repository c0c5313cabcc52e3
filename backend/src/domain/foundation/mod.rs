//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, websafe keys, calendar parsing and the error types
//! that form the vocabulary of the Conference Central domain.

mod auth;
mod dates;
mod errors;
mod ids;
mod keys;
mod ownership;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use dates::{parse_date, parse_time};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ConferenceId, SessionId, UserId};
pub use keys::{ConferenceKey, SessionKey};
pub use ownership::OwnedByUser;
pub use timestamp::Timestamp;
