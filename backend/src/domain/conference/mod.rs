//! Conference domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - Conference entity and creation defaults
//! - `filter` - Query filter compiler for conference search
//! - `registration` - Seat accounting when users register or unregister

mod aggregate;
mod errors;
pub mod filter;
mod registration;

pub use aggregate::{Conference, ConferenceDraft, DEFAULT_CITY, DEFAULT_TOPICS};
pub use errors::ConferenceError;
pub use filter::{FilterClause, FilterError, FilterField, FilterOperator, FilterValue, QueryPlan};
pub use registration::{apply_registration, RegistrationAction};
