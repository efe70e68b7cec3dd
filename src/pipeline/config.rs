//! Pipeline tuning knobs.

use std::time::Duration;

use serde::Deserialize;

use crate::constants::{DEFAULT_MIN_QUERY_CHARS, DEFAULT_QUIET_INTERVAL_MS};
use crate::errors::{Error, Result};

/// Tuning for the text branch's filter and debounce stages.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Quiet time that must elapse on the text branch before its latest
    /// value is forwarded, in milliseconds.
    pub quiet_interval_ms: u64,

    /// Trimmed query length at or below which text emissions are
    /// discarded.
    pub min_query_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            quiet_interval_ms: DEFAULT_QUIET_INTERVAL_MS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

impl PipelineConfig {
    /// Quiet interval as a [`Duration`].
    pub fn quiet_interval(&self) -> Duration {
        Duration::from_millis(self.quiet_interval_ms)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.quiet_interval_ms == 0 {
            return Err(Error::InvalidConfigValue(
                "quiet_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.quiet_interval(), Duration::from_millis(1000));
        assert_eq!(config.min_query_chars, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: PipelineConfig = serde_json::from_str(r#"{"quiet_interval_ms": 250}"#).unwrap();
        assert_eq!(config.quiet_interval(), Duration::from_millis(250));
        assert_eq!(config.min_query_chars, 2);
    }

    #[test]
    fn test_zero_quiet_interval_rejected() {
        let config = PipelineConfig {
            quiet_interval_ms: 0,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue(_))
        ));
    }
}
