//! Background task queue port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Work that runs outside the request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Task {
    /// Publish `speaker` into the featured speaker slot.
    SetFeaturedSpeaker { speaker: String },
}

impl Task {
    pub fn name(&self) -> &'static str {
        match self {
            Task::SetFeaturedSpeaker { .. } => "set_featured_speaker",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum TaskError {
    #[error("Task queue is closed")]
    Closed,

    #[error("Task failed: {0}")]
    Failed(String),
}

/// Fire-and-forget dispatch. Enqueueing never waits for the task to run.
#[async_trait]
pub trait TaskQueue: Send + Sync {
    async fn enqueue(&self, task: Task) -> Result<(), TaskError>;
}
