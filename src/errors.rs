//! Error types for the queryflow pipeline.
//!
//! The pipeline itself converts recoverable failures (a failing search
//! backend) into empty result sets; these types surface only where the
//! caller must act, such as a listener registration failing during
//! binding.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Registering a listener on an input collaborator failed.
    ///
    /// Fatal to the screen activation that attempted it; the binder stays
    /// inactive and any listener registered earlier in the same binding is
    /// deregistered.
    #[error("Listener registration failed: {0}")]
    Registration(String),

    /// The search backend failed for one query.
    ///
    /// Inside the pipeline this is logged and delivered as an empty result
    /// set; the variant is public so engine implementations can construct
    /// it.
    #[error("Search backend failed: {0}")]
    Search(String),

    /// A pipeline configuration value is out of range.
    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}
