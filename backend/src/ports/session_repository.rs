//! Session repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionKey};
use crate::domain::session::{Session, SessionQuery};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &Session) -> Result<(), DomainError>;

    async fn find(&self, key: &SessionKey) -> Result<Option<Session>, DomainError>;

    /// Batch lookup. Keys that do not resolve are skipped; order follows `keys`.
    async fn find_many(&self, keys: &[SessionKey]) -> Result<Vec<Session>, DomainError>;

    /// All sessions matching `query`, oldest first.
    async fn find_by(&self, query: &SessionQuery) -> Result<Vec<Session>, DomainError>;

    /// Number of sessions matching `query`.
    async fn count_by(&self, query: &SessionQuery) -> Result<usize, DomainError>;
}
