//! SetFeaturedSpeakerHandler - Writes the featured speaker slot.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::session::FEATURED_SPEAKER_KEY;
use crate::ports::MemoCache;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFeaturedSpeakerCommand {
    pub speaker: String,
}

/// Overwrites the single global slot. No compare-and-set: the last writer wins.
pub struct SetFeaturedSpeakerHandler {
    cache: Arc<dyn MemoCache>,
}

impl SetFeaturedSpeakerHandler {
    pub fn new(cache: Arc<dyn MemoCache>) -> Self {
        Self { cache }
    }

    pub async fn handle(&self, cmd: SetFeaturedSpeakerCommand) -> Result<(), DomainError> {
        self.cache.set(FEATURED_SPEAKER_KEY, &cmd.speaker).await?;
        tracing::info!(speaker = %cmd.speaker, "Featured speaker set");
        Ok(())
    }
}
