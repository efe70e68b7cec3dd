//! Query dispatch stage.
//!
//! Takes surviving queries off the merged stream one at a time: signals
//! busy on the UI context, runs the blocking search call on the blocking
//! pool, and delivers the results back on the UI context. Every UI-bound
//! closure checks the subscription's alive flag at execution time, so
//! release synchronously stops delivery even for work already queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::mpsc;

use crate::engine::SearchEngine;
use crate::events::QueryBranch;
use crate::ui::UiDispatcher;
use crate::view::SearchView;

pub(crate) async fn run_dispatch(
    mut merged_rx: mpsc::UnboundedReceiver<(QueryBranch, String)>,
    engine: Arc<dyn SearchEngine>,
    view: Arc<dyn SearchView>,
    ui: Arc<dyn UiDispatcher>,
    alive: Arc<AtomicBool>,
) {
    while let Some((branch, query)) = merged_rx.recv().await {
        debug!("dispatching {:?} query {:?}", branch, query);

        dispatch_guarded(&ui, &alive, {
            let view = Arc::clone(&view);
            move || view.show_busy()
        });

        let results = run_search(&engine, query).await;

        if !alive.load(Ordering::SeqCst) {
            debug!("subscription released mid-search; discarding results");
            continue;
        }

        dispatch_guarded(&ui, &alive, {
            let view = Arc::clone(&view);
            move || view.show_results(results)
        });
    }
}

fn dispatch_guarded(
    ui: &Arc<dyn UiDispatcher>,
    alive: &Arc<AtomicBool>,
    callback: impl FnOnce() + Send + 'static,
) {
    let alive = Arc::clone(alive);
    ui.dispatch(Box::new(move || {
        if alive.load(Ordering::SeqCst) {
            callback();
        }
    }));
}

/// Runs the blocking search call off the UI/async context. Failures are
/// logged and converted to an empty result set so the pipeline keeps
/// running.
async fn run_search(engine: &Arc<dyn SearchEngine>, query: String) -> Vec<String> {
    let engine = Arc::clone(engine);
    let task_query = query.clone();

    match tokio::task::spawn_blocking(move || engine.search(&task_query)).await {
        Ok(Ok(results)) => results,
        Ok(Err(err)) => {
            warn!("search for {query:?} failed: {err}; delivering empty results");
            Vec::new()
        }
        Err(err) => {
            warn!("search task for {query:?} panicked: {err}; delivering empty results");
            Vec::new()
        }
    }
}
