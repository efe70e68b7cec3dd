//! Button-activation adapter.

use std::sync::Arc;

use log::debug;

use super::{QueryEmitter, QuerySource, SourceHandle};
use crate::errors::Result;
use crate::inputs::{ActivationSource, TextInput};

/// Emits the text field's current content on every button activation.
pub struct ButtonQuerySource {
    button: Arc<dyn ActivationSource>,
    input: Arc<dyn TextInput>,
}

impl ButtonQuerySource {
    pub fn new(button: Arc<dyn ActivationSource>, input: Arc<dyn TextInput>) -> Self {
        Self { button, input }
    }
}

impl QuerySource for ButtonQuerySource {
    fn start(&mut self, emitter: QueryEmitter) -> Result<SourceHandle> {
        let input = Arc::clone(&self.input);
        let id = self.button.add_listener(Box::new(move || {
            // None text is malformed widget state, normalized here
            let query = input.text().unwrap_or_default();
            debug!("search button activated with query {:?}", query);
            emitter.emit(query);
        }))?;

        let button = Arc::clone(&self.button);
        Ok(SourceHandle::new(move || button.remove_listener(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{MockButton, MockTextInput};
    use tokio::sync::mpsc;

    fn started_source() -> (
        Arc<MockButton>,
        Arc<MockTextInput>,
        SourceHandle,
        mpsc::UnboundedReceiver<String>,
    ) {
        let button = Arc::new(MockButton::new());
        let input = Arc::new(MockTextInput::new());
        let mut source = ButtonQuerySource::new(button.clone(), input.clone());

        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = source.start(QueryEmitter::new(sender)).unwrap();
        (button, input, handle, receiver)
    }

    #[test]
    fn test_click_emits_current_text() {
        let (button, input, _handle, mut receiver) = started_source();

        input.set_text("brie");
        button.click();

        assert_eq!(receiver.try_recv().unwrap(), "brie");
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_missing_text_normalized_to_empty() {
        let (button, input, _handle, mut receiver) = started_source();

        input.clear_text();
        button.click();

        assert_eq!(receiver.try_recv().unwrap(), "");
    }

    #[test]
    fn test_release_deregisters_listener() {
        let (button, input, mut handle, mut receiver) = started_source();
        assert_eq!(button.listener_count(), 1);

        handle.release();
        assert_eq!(button.listener_count(), 0);

        input.set_text("gouda");
        button.click();
        assert!(receiver.try_recv().is_err());
    }
}
