//! Emission and cancellation plumbing shared by the adapters.

use log::debug;
use tokio::sync::mpsc;

/// Handle for pushing queries into one pipeline branch.
///
/// Thin wrapper over an unbounded channel sender, so emission is fast and
/// non-blocking from any listener context. There is no buffering contract
/// beyond the channel: emitting after the branch has shut down drops the
/// value, and a signal with no active subscriber is lost.
#[derive(Clone)]
pub struct QueryEmitter {
    sender: mpsc::UnboundedSender<String>,
}

impl QueryEmitter {
    pub(crate) fn new(sender: mpsc::UnboundedSender<String>) -> Self {
        Self { sender }
    }

    /// Push one query into the branch.
    pub fn emit(&self, query: String) {
        if self.sender.send(query).is_err() {
            debug!("query emitted after branch shutdown; dropping");
        }
    }
}

/// Deregistration handle returned by [`crate::sources::QuerySource::start`].
///
/// Releasing twice is a no-op; dropping an unreleased handle releases it.
pub struct SourceHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl SourceHandle {
    pub(crate) fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Deregister the underlying listener. Idempotent.
    pub fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for SourceHandle {
    fn drop(&mut self) {
        self.release();
    }
}
