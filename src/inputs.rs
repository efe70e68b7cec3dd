//! Input collaborator traits.
//!
//! The button and text field are external, UI-owned widgets. The pipeline
//! only needs to register and deregister listeners on them and to read the
//! field's current content, so they are modeled as trait objects. Mock
//! implementations live here too, for tests and for hosts without a real
//! toolkit.
//!
//! # Design Rules
//!
//! - Listener callbacks are invoked on whatever context the widget fires
//!   on; they must be fast and non-blocking (the adapters only push onto a
//!   channel).
//! - Registration may fail (taxonomy: fatal to the activation); removal
//!   of an unknown listener id is a no-op.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::Result;

/// Identifier for one registered listener, scoped to its widget.
pub type ListenerId = u64;

/// A widget that fires a signal on each activation (a search button).
pub trait ActivationSource: Send + Sync {
    /// Register a listener invoked on every activation.
    fn add_listener(&self, listener: Box<dyn Fn() + Send + Sync>) -> Result<ListenerId>;

    /// Deregister a previously registered listener. Unknown ids are
    /// ignored.
    fn remove_listener(&self, id: ListenerId);
}

/// A widget holding editable text that fires on each content change.
pub trait TextInput: Send + Sync {
    /// Current content of the field. `None` models malformed external
    /// state; adapters normalize it to an empty string.
    fn text(&self) -> Option<String>;

    /// Register a listener invoked with the new full content on every
    /// change.
    fn add_change_listener(
        &self,
        listener: Box<dyn Fn(Option<String>) + Send + Sync>,
    ) -> Result<ListenerId>;

    /// Deregister a previously registered change listener. Unknown ids are
    /// ignored.
    fn remove_change_listener(&self, id: ListenerId);
}

struct ListenerTable<L: ?Sized> {
    next_id: ListenerId,
    listeners: HashMap<ListenerId, Arc<L>>,
}

// Manual impl: derive would demand L: Default, which `dyn Fn` cannot meet
impl<L: ?Sized> Default for ListenerTable<L> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: HashMap::new(),
        }
    }
}

impl<L: ?Sized> ListenerTable<L> {
    fn insert(&mut self, listener: Arc<L>) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    // Snapshot so callbacks run outside the table lock
    fn snapshot(&self) -> Vec<Arc<L>> {
        self.listeners.values().cloned().collect()
    }
}

/// Mock button - fires registered listeners on [`MockButton::click`].
#[derive(Default)]
pub struct MockButton {
    table: Mutex<ListenerTable<dyn Fn() + Send + Sync>>,
}

impl MockButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate one activation.
    pub fn click(&self) {
        let listeners = self.table.lock().unwrap().snapshot();
        for listener in listeners {
            listener();
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.table.lock().unwrap().listeners.len()
    }
}

impl ActivationSource for MockButton {
    fn add_listener(&self, listener: Box<dyn Fn() + Send + Sync>) -> Result<ListenerId> {
        Ok(self.table.lock().unwrap().insert(Arc::from(listener)))
    }

    fn remove_listener(&self, id: ListenerId) {
        self.table.lock().unwrap().listeners.remove(&id);
    }
}

/// Mock text field - stores content and fires change listeners on
/// [`MockTextInput::set_text`].
#[derive(Default)]
pub struct MockTextInput {
    content: Mutex<Option<String>>,
    table: Mutex<ListenerTable<dyn Fn(Option<String>) + Send + Sync>>,
}

impl MockTextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content and notify change listeners.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        *self.content.lock().unwrap() = Some(text.clone());
        self.notify(Some(text));
    }

    /// Clear the content to the malformed `None` state and notify change
    /// listeners.
    pub fn clear_text(&self) {
        *self.content.lock().unwrap() = None;
        self.notify(None);
    }

    /// Number of currently registered change listeners.
    pub fn listener_count(&self) -> usize {
        self.table.lock().unwrap().listeners.len()
    }

    fn notify(&self, text: Option<String>) {
        let listeners = self.table.lock().unwrap().snapshot();
        for listener in listeners {
            listener(text.clone());
        }
    }
}

impl TextInput for MockTextInput {
    fn text(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    fn add_change_listener(
        &self,
        listener: Box<dyn Fn(Option<String>) + Send + Sync>,
    ) -> Result<ListenerId> {
        Ok(self.table.lock().unwrap().insert(Arc::from(listener)))
    }

    fn remove_change_listener(&self, id: ListenerId) {
        self.table.lock().unwrap().listeners.remove(&id);
    }
}
