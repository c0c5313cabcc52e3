//! TaskWorker - Background consumer for the in-process task queue.
//!
//! ## Graceful Shutdown
//!
//! On the shutdown signal the worker runs every task already queued, then
//! stops. Tasks enqueued after that point are dropped with the channel.

use tokio::sync::{mpsc, watch};

use crate::application::handlers::tasks::TaskRunner;
use crate::ports::Task;

/// Runs queued tasks one at a time against the application layer.
///
/// Task failures are logged and never stop the loop.
pub struct TaskWorker {
    receiver: mpsc::UnboundedReceiver<Task>,
    runner: TaskRunner,
}

impl TaskWorker {
    pub fn new(receiver: mpsc::UnboundedReceiver<Task>, runner: TaskRunner) -> Self {
        Self { receiver, runner }
    }

    /// Run until shutdown is signalled or every queue handle is dropped.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!("Task worker started");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    // A dropped sender counts as shutdown.
                    if changed.is_err() || *shutdown.borrow() {
                        let drained = self.drain().await;
                        tracing::info!(drained, "Task worker stopped");
                        return;
                    }
                }

                next = self.receiver.recv() => match next {
                    Some(task) => self.execute(task).await,
                    None => {
                        tracing::info!("Task queue closed, worker stopped");
                        return;
                    }
                }
            }
        }
    }

    /// Runs whatever is already queued without waiting for more.
    pub async fn drain(&mut self) -> usize {
        let mut count = 0;
        while let Ok(task) = self.receiver.try_recv() {
            self.execute(task).await;
            count += 1;
        }
        count
    }

    async fn execute(&self, task: Task) {
        let name = task.name();
        match self.runner.run(task).await {
            Ok(()) => tracing::debug!(task = name, "Task completed"),
            Err(e) => tracing::warn!(task = name, error = %e, "Task failed"),
        }
    }
}
