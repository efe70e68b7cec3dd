//! Stream combinator.
//!
//! [`bind`] merges the button and text branches into one query stream:
//! button activations pass straight through, text mutations are filtered
//! and debounced first, and every surviving query drives the search
//! backend off the UI context with busy/result delivery routed back
//! through the UI dispatcher.

mod branch;
mod config;
mod dispatch;
mod subscription;

pub use config::PipelineConfig;
pub use subscription::Subscription;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::info;
use tokio::sync::mpsc;

use crate::engine::SearchEngine;
use crate::errors::Result;
use crate::sources::{QueryEmitter, QuerySource};
use crate::ui::UiDispatcher;
use crate::view::SearchView;

/// Binds both query sources to the search backend and the view.
///
/// Registers a listener on each source, spawns the branch and dispatch
/// tasks, and returns the subscription that owns the whole binding. A
/// registration failure aborts the binding; a listener registered earlier
/// in the same call is deregistered again before the error propagates.
///
/// Must be called from within a tokio runtime.
pub fn bind(
    mut button_source: impl QuerySource,
    mut text_source: impl QuerySource,
    engine: Arc<dyn SearchEngine>,
    view: Arc<dyn SearchView>,
    ui: Arc<dyn UiDispatcher>,
    config: PipelineConfig,
) -> Result<Subscription> {
    config.validate()?;

    let (merged_tx, merged_rx) = mpsc::unbounded_channel();
    let (button_tx, button_rx) = mpsc::unbounded_channel();
    let (text_tx, text_rx) = mpsc::unbounded_channel();

    // On failure of the second registration the first handle drops here
    // and deregisters its listener.
    let button_handle = button_source.start(QueryEmitter::new(button_tx))?;
    let text_handle = text_source.start(QueryEmitter::new(text_tx))?;

    let alive = Arc::new(AtomicBool::new(true));
    let tasks = vec![
        tokio::spawn(branch::run_button_branch(button_rx, merged_tx.clone())),
        tokio::spawn(branch::run_text_branch(
            text_rx,
            merged_tx,
            config.quiet_interval(),
            config.min_query_chars,
        )),
        tokio::spawn(dispatch::run_dispatch(
            merged_rx,
            engine,
            view,
            ui,
            Arc::clone(&alive),
        )),
    ];

    info!(
        "search pipeline bound (quiet interval {}ms, min query length {})",
        config.quiet_interval_ms, config.min_query_chars
    );
    Ok(Subscription::new(
        alive,
        vec![button_handle, text_handle],
        tasks,
    ))
}
