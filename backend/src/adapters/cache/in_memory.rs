//! In-memory memo cache for testing and development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::MemoCache;

/// Process-local memo cache. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemoCache {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryMemoCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemoCache for InMemoryMemoCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
