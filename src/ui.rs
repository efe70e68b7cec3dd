//! UI-affinity dispatch.
//!
//! All UI-facing callbacks run on a single UI-affinity context. Rather
//! than assuming a thread identity, the pipeline passes every UI-bound
//! closure to a [`UiDispatcher`] supplied by the host; the host decides
//! what "the UI context" is (a toolkit main loop, a test draining tasks
//! inline, ...).
//!
//! # Design Rules
//!
//! - `dispatch()` must be fast and non-blocking (no waiting on the UI)
//! - Tasks are executed in dispatch order
//! - Dispatch after the UI context is gone drops the task (best-effort)

use log::debug;
use tokio::sync::mpsc;

/// Closure executed on the UI-affinity context.
pub type UiTask = Box<dyn FnOnce() + Send>;

/// Hand-off point to the UI-affinity context.
pub trait UiDispatcher: Send + Sync {
    /// Queue a task for execution on the UI context.
    fn dispatch(&self, task: UiTask);
}

/// Dispatcher backed by an unbounded channel.
///
/// The host's UI loop owns the paired [`UiTaskReceiver`] and drains it.
pub struct ChannelUiDispatcher {
    sender: mpsc::UnboundedSender<UiTask>,
}

impl ChannelUiDispatcher {
    /// Creates the dispatcher and the receiver the UI loop drains.
    pub fn new() -> (Self, UiTaskReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, UiTaskReceiver { receiver })
    }
}

impl UiDispatcher for ChannelUiDispatcher {
    fn dispatch(&self, task: UiTask) {
        if self.sender.send(task).is_err() {
            debug!("UI context gone; dropping dispatched task");
        }
    }
}

/// Receiving half of [`ChannelUiDispatcher`].
pub struct UiTaskReceiver {
    receiver: mpsc::UnboundedReceiver<UiTask>,
}

impl UiTaskReceiver {
    /// Run every task queued so far. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            ran += 1;
        }
        ran
    }

    /// Await the next task and run it. Returns `false` once every
    /// dispatcher handle is gone and the queue is drained.
    pub async fn run_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }
}

/// Runs tasks immediately on the calling thread.
///
/// For tests and for hosts whose pipeline callers already live on the UI
/// context.
#[derive(Clone, Default)]
pub struct InlineUiDispatcher;

impl UiDispatcher for InlineUiDispatcher {
    fn dispatch(&self, task: UiTask) {
        task();
    }
}
