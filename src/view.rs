//! Output collaborator trait.
//!
//! The pipeline reports progress and results to a view. Implementations
//! are invoked on the UI-affinity context only (the pipeline routes every
//! call through the [`crate::ui::UiDispatcher`]), so they may touch UI
//! state directly.

use std::sync::{Arc, Mutex};

/// Receiver for search progress and results.
pub trait SearchView: Send + Sync {
    /// Signal that a search is in progress.
    fn show_busy(&self);

    /// Display the results for the most recently dispatched query.
    fn show_results(&self, results: Vec<String>);
}

/// No-op view for contexts that don't render anything.
#[derive(Clone, Default)]
pub struct NoOpSearchView;

impl SearchView for NoOpSearchView {
    fn show_busy(&self) {
        // Intentionally empty
    }

    fn show_results(&self, _results: Vec<String>) {
        // Intentionally empty
    }
}

/// One recorded view invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewCall {
    Busy,
    Results(Vec<String>),
}

/// Mock view for testing - collects invocations in order.
#[derive(Clone, Default)]
pub struct RecordingSearchView {
    calls: Arc<Mutex<Vec<ViewCall>>>,
}

impl RecordingSearchView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded calls in invocation order.
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns how many busy signals were delivered.
    pub fn busy_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, ViewCall::Busy))
            .count()
    }

    /// Returns the most recent result set, if any was delivered.
    pub fn last_results(&self) -> Option<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|call| match call {
                ViewCall::Results(results) => Some(results.clone()),
                ViewCall::Busy => None,
            })
    }

    /// Returns true if nothing has been delivered.
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }
}

impl SearchView for RecordingSearchView {
    fn show_busy(&self) {
        self.calls.lock().unwrap().push(ViewCall::Busy);
    }

    fn show_results(&self, results: Vec<String>) {
        self.calls.lock().unwrap().push(ViewCall::Results(results));
    }
}
