//! TaskRunner - Dispatches queued tasks to their handlers.

use std::sync::Arc;

use crate::ports::{MemoCache, Task, TaskError};

use super::{SetFeaturedSpeakerCommand, SetFeaturedSpeakerHandler};

pub struct TaskRunner {
    set_featured_speaker: SetFeaturedSpeakerHandler,
}

impl TaskRunner {
    pub fn new(cache: Arc<dyn MemoCache>) -> Self {
        Self {
            set_featured_speaker: SetFeaturedSpeakerHandler::new(cache),
        }
    }

    pub async fn run(&self, task: Task) -> Result<(), TaskError> {
        match task {
            Task::SetFeaturedSpeaker { speaker } => self
                .set_featured_speaker
                .handle(SetFeaturedSpeakerCommand { speaker })
                .await
                .map_err(|e| TaskError::Failed(e.to_string())),
        }
    }
}
