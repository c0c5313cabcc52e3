//! Unbounded in-process task queue.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::ports::{Task, TaskError, TaskQueue};

/// Sending half of the in-process queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ChannelTaskQueue {
    sender: mpsc::UnboundedSender<Task>,
}

/// Creates a connected queue and the receiver a `TaskWorker` consumes.
pub fn task_channel() -> (ChannelTaskQueue, mpsc::UnboundedReceiver<Task>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (ChannelTaskQueue { sender }, receiver)
}

#[async_trait]
impl TaskQueue for ChannelTaskQueue {
    async fn enqueue(&self, task: Task) -> Result<(), TaskError> {
        tracing::debug!(task = task.name(), "Enqueueing task");
        self.sender.send(task).map_err(|_| TaskError::Closed)
    }
}
