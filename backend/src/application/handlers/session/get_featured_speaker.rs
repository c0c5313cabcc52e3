//! GetFeaturedSpeakerHandler - Reads the featured speaker slot.

use std::sync::Arc;

use crate::domain::session::{SessionError, FEATURED_SPEAKER_KEY};
use crate::ports::MemoCache;

pub struct GetFeaturedSpeakerHandler {
    cache: Arc<dyn MemoCache>,
}

impl GetFeaturedSpeakerHandler {
    pub fn new(cache: Arc<dyn MemoCache>) -> Self {
        Self { cache }
    }

    /// `None` until a featured speaker task has run.
    pub async fn handle(&self) -> Result<Option<String>, SessionError> {
        Ok(self.cache.get(FEATURED_SPEAKER_KEY).await?)
    }
}
