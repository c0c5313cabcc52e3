//! In-memory entity store.
//!
//! Implements every entity port over one shared state behind a single
//! `tokio::sync::RwLock`. Used by tests and local development. Registration
//! applies its two-record update under one write guard, which gives the same
//! serialization the PostgreSQL ledger gets from row locks.

mod conference;
mod profile;
mod registration;
mod session;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::conference::Conference;
use crate::domain::foundation::{ConferenceKey, UserId};
use crate::domain::profile::Profile;
use crate::domain::session::Session;

#[derive(Debug, Default)]
struct StoreState {
    profiles: HashMap<UserId, Profile>,
    conferences: HashMap<ConferenceKey, Conference>,
    /// Insertion order doubles as creation order.
    sessions: Vec<Session>,
}

/// Shared in-memory store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored conferences (useful for tests)
    pub async fn conference_count(&self) -> usize {
        self.state.read().await.conferences.len()
    }

    /// Number of stored sessions (useful for tests)
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }
}
