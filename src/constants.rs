/// Default quiet interval for the text branch debounce, in milliseconds
pub const DEFAULT_QUIET_INTERVAL_MS: u64 = 1000;

/// Trimmed query length at or below which text emissions are discarded
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;
