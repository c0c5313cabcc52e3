//! Named key/value cache port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// String cache addressed by well-known slot names. Writes overwrite.
#[async_trait]
pub trait MemoCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
