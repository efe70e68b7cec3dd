//! Event source adapters.
//!
//! Convert push-based widget listeners into cancellable query streams.
//! Each adapter registers exactly one listener when started and hands back
//! a [`SourceHandle`] that deregisters it; a fresh adapter is built per
//! screen activation, so the streams are restartable.

mod button;
mod emitter;
mod text;

pub use button::*;
pub use emitter::*;
pub use text::*;

use crate::errors::Result;

/// A restartable, cancellable push source of query strings.
pub trait QuerySource: Send {
    /// Register on the underlying widget and begin emitting.
    ///
    /// The returned handle deregisters the listener when released. After
    /// registration the source itself cannot fail; malformed widget state
    /// is normalized, never propagated.
    fn start(&mut self, emitter: QueryEmitter) -> Result<SourceHandle>;
}
