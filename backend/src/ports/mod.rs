//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Identity
//!
//! - `SessionValidator` - Resolves a bearer token to an `AuthenticatedUser`
//!
//! ## Entity Store
//!
//! - `ProfileRepository`, `ConferenceRepository`, `SessionRepository`
//! - `RegistrationLedger` - Atomic profile + conference seat update
//!
//! ## Background Work
//!
//! - `TaskQueue` - Fire-and-forget task dispatch
//! - `MemoCache` - Named cache slots

mod conference_repository;
mod memo_cache;
mod profile_repository;
mod registration_ledger;
mod session_repository;
mod session_validator;
mod task_queue;

pub use conference_repository::ConferenceRepository;
pub use memo_cache::MemoCache;
pub use profile_repository::ProfileRepository;
pub use registration_ledger::RegistrationLedger;
pub use session_repository::SessionRepository;
pub use session_validator::SessionValidator;
pub use task_queue::{Task, TaskError, TaskQueue};
