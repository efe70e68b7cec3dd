//! Search backend trait.

use crate::errors::Result;

/// Externally supplied search backend.
///
/// `search` is synchronous and potentially slow; the pipeline always runs
/// it on the blocking pool, never on the thread that services UI events.
pub trait SearchEngine: Send + Sync {
    /// Return the ordered results for one query.
    fn search(&self, query: &str) -> Result<Vec<String>>;
}

impl<F> SearchEngine for F
where
    F: Fn(&str) -> Result<Vec<String>> + Send + Sync,
{
    fn search(&self, query: &str) -> Result<Vec<String>> {
        self(query)
    }
}

/// Engine returning the same result list for every query. For tests and
/// hosts that stub out the backend.
#[derive(Clone, Default)]
pub struct FixedSearchEngine {
    results: Vec<String>,
}

impl FixedSearchEngine {
    pub fn new(results: Vec<String>) -> Self {
        Self { results }
    }
}

impl SearchEngine for FixedSearchEngine {
    fn search(&self, _query: &str) -> Result<Vec<String>> {
        Ok(self.results.clone())
    }
}
