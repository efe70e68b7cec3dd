//! Text-mutation adapter.

use std::sync::Arc;

use super::{QueryEmitter, QuerySource, SourceHandle};
use crate::errors::Result;
use crate::inputs::TextInput;

/// Emits the new full content on every text field change.
///
/// Filtering and debouncing happen downstream in the pipeline; the adapter
/// itself forwards everything.
pub struct TextQuerySource {
    input: Arc<dyn TextInput>,
}

impl TextQuerySource {
    pub fn new(input: Arc<dyn TextInput>) -> Self {
        Self { input }
    }
}

impl QuerySource for TextQuerySource {
    fn start(&mut self, emitter: QueryEmitter) -> Result<SourceHandle> {
        let id = self.input.add_change_listener(Box::new(move |text| {
            emitter.emit(text.unwrap_or_default());
        }))?;

        let input = Arc::clone(&self.input);
        Ok(SourceHandle::new(move || input.remove_change_listener(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::MockTextInput;
    use tokio::sync::mpsc;

    #[test]
    fn test_changes_are_forwarded_in_order() {
        let input = Arc::new(MockTextInput::new());
        let mut source = TextQuerySource::new(input.clone());

        let (sender, mut receiver) = mpsc::unbounded_channel();
        let _handle = source.start(QueryEmitter::new(sender)).unwrap();

        input.set_text("b");
        input.set_text("br");
        input.set_text("brie");

        assert_eq!(receiver.try_recv().unwrap(), "b");
        assert_eq!(receiver.try_recv().unwrap(), "br");
        assert_eq!(receiver.try_recv().unwrap(), "brie");
    }

    #[test]
    fn test_cleared_text_emits_empty_string() {
        let input = Arc::new(MockTextInput::new());
        let mut source = TextQuerySource::new(input.clone());

        let (sender, mut receiver) = mpsc::unbounded_channel();
        let _handle = source.start(QueryEmitter::new(sender)).unwrap();

        input.clear_text();
        assert_eq!(receiver.try_recv().unwrap(), "");
    }

    #[test]
    fn test_release_deregisters_listener() {
        let input = Arc::new(MockTextInput::new());
        let mut source = TextQuerySource::new(input.clone());

        let (sender, mut receiver) = mpsc::unbounded_channel();
        let mut handle = source.start(QueryEmitter::new(sender)).unwrap();
        assert_eq!(input.listener_count(), 1);

        handle.release();
        assert_eq!(input.listener_count(), 0);

        input.set_text("gouda");
        assert!(receiver.try_recv().is_err());
    }
}
