//! Task queue that records instead of running, for tests.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::ports::{Task, TaskError, TaskQueue};

#[derive(Debug, Default)]
pub struct RecordingTaskQueue {
    tasks: Mutex<Vec<Task>>,
    fail: bool,
}

impl RecordingTaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue whose every `enqueue` fails with `TaskError::Closed`.
    pub fn failing() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Tasks enqueued so far, oldest first.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TaskQueue for RecordingTaskQueue {
    async fn enqueue(&self, task: Task) -> Result<(), TaskError> {
        if self.fail {
            return Err(TaskError::Closed);
        }
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(task);
        Ok(())
    }
}
