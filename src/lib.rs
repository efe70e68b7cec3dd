//! Queryflow - reactive search-input pipeline.
//!
//! Wires a search button and a text field to a blocking search backend.
//! Both inputs become cancellable query streams; the text stream is
//! filtered and debounced; the merged stream drives the backend off the
//! UI-affinity context; results are delivered back through an explicit
//! UI dispatcher. The crate is UI-toolkit-agnostic and defines trait
//! seams for every external collaborator.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod inputs;
pub mod lifecycle;
pub mod pipeline;
pub mod sources;
pub mod ui;
pub mod view;

// Re-export the public surface at the crate root
pub use engine::*;
pub use errors::{Error, Result};
pub use events::*;
pub use inputs::*;
pub use lifecycle::*;
pub use pipeline::*;
pub use sources::*;
pub use ui::*;
pub use view::*;
