//! Task queue adapters.
//!
//! - `ChannelTaskQueue` + `TaskWorker` - In-process queue drained by a
//!   background tokio task
//! - `RecordingTaskQueue` - Captures enqueued tasks for tests

mod channel;
mod recording;
mod worker;

pub use channel::{task_channel, ChannelTaskQueue};
pub use recording::RecordingTaskQueue;
pub use worker::TaskWorker;
