//! Subscription handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use tokio::task::JoinHandle;

use crate::sources::SourceHandle;

/// The live binding between the input sources and the pipeline.
///
/// Exactly one is active per screen instance. Releasing it deregisters
/// both source listeners, cancels any pending debounce timer, and stops
/// all future UI delivery; an in-flight search call is abandoned rather
/// than interrupted and its eventual result is discarded. Releasing twice
/// is a no-op; dropping an unreleased handle releases it.
pub struct Subscription {
    alive: Arc<AtomicBool>,
    sources: Vec<SourceHandle>,
    tasks: Vec<JoinHandle<()>>,
}

impl Subscription {
    pub(crate) fn new(
        alive: Arc<AtomicBool>,
        sources: Vec<SourceHandle>,
        tasks: Vec<JoinHandle<()>>,
    ) -> Self {
        Self {
            alive,
            sources,
            tasks,
        }
    }

    /// Whether this handle has been released.
    pub fn is_released(&self) -> bool {
        !self.alive.load(Ordering::SeqCst)
    }

    /// Tear down the pipeline. Idempotent.
    ///
    /// The alive flag flips first, so UI closures already queued behind
    /// this call are suppressed at execution time.
    pub fn release(&mut self) {
        if !self.alive.swap(false, Ordering::SeqCst) {
            return;
        }

        debug!("releasing search pipeline subscription");
        for source in &mut self.sources {
            source.release();
        }
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
