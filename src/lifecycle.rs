//! Screen lifecycle binding.
//!
//! Ties the pipeline to a screen's visibility: becoming visible builds
//! fresh adapters and binds them, becoming hidden releases the
//! subscription. The binder owns the collaborator handles so repeated
//! activations reuse the same widgets with new listener registrations.

use std::sync::Arc;

use log::{debug, warn};

use crate::engine::SearchEngine;
use crate::errors::Result;
use crate::inputs::{ActivationSource, TextInput};
use crate::pipeline::{bind, PipelineConfig, Subscription};
use crate::sources::{ButtonQuerySource, TextQuerySource};
use crate::ui::UiDispatcher;
use crate::view::SearchView;

/// Visibility state of the bound screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Inactive,
    Active,
}

/// Binds the search pipeline to a screen's visibility lifecycle.
pub struct SearchBinder {
    button: Arc<dyn ActivationSource>,
    input: Arc<dyn TextInput>,
    engine: Arc<dyn SearchEngine>,
    view: Arc<dyn SearchView>,
    ui: Arc<dyn UiDispatcher>,
    config: PipelineConfig,
    subscription: Option<Subscription>,
}

impl SearchBinder {
    pub fn new(
        button: Arc<dyn ActivationSource>,
        input: Arc<dyn TextInput>,
        engine: Arc<dyn SearchEngine>,
        view: Arc<dyn SearchView>,
        ui: Arc<dyn UiDispatcher>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            button,
            input,
            engine,
            view,
            ui,
            config,
            subscription: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScreenState {
        if self.subscription.is_some() {
            ScreenState::Active
        } else {
            ScreenState::Inactive
        }
    }

    /// Screen became visible: build fresh adapters and bind the pipeline.
    ///
    /// UI toolkits can repeat visibility signals, so a call while already
    /// active is ignored. On registration failure the binder stays
    /// inactive and the error propagates to the caller.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_show(&mut self) -> Result<()> {
        if self.subscription.is_some() {
            warn!("on_show while already active; ignoring");
            return Ok(());
        }

        let button_source =
            ButtonQuerySource::new(Arc::clone(&self.button), Arc::clone(&self.input));
        let text_source = TextQuerySource::new(Arc::clone(&self.input));

        self.subscription = Some(bind(
            button_source,
            text_source,
            Arc::clone(&self.engine),
            Arc::clone(&self.view),
            Arc::clone(&self.ui),
            self.config.clone(),
        )?);
        debug!("search screen bound");
        Ok(())
    }

    /// Screen became hidden: release the subscription.
    ///
    /// Deregisters both listeners, cancels any pending debounce timer, and
    /// discards anything still in flight. A call while already inactive is
    /// a no-op.
    pub fn on_hide(&mut self) {
        match self.subscription.take() {
            Some(mut subscription) => {
                subscription.release();
                debug!("search screen unbound");
            }
            None => debug!("on_hide while already inactive; ignoring"),
        }
    }
}

impl Drop for SearchBinder {
    fn drop(&mut self) {
        self.on_hide();
    }
}
