//! Pipeline diagnostic events.
//!
//! These records describe what the pipeline did with each input emission.
//! They are serialized into debug logs; hosts that want richer telemetry
//! can reuse the same types.

use serde::{Deserialize, Serialize};

/// Which input branch produced a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryBranch {
    Button,
    Text,
}

/// Outcome of one input emission.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryEvent {
    /// The emission survived filtering/debouncing and entered the merged
    /// stream.
    Accepted { branch: QueryBranch, query: String },

    /// The emission was discarded by the text branch filter.
    Discarded { branch: QueryBranch, query: String },
}

impl QueryEvent {
    /// Creates an Accepted event.
    pub fn accepted(branch: QueryBranch, query: impl Into<String>) -> Self {
        Self::Accepted {
            branch,
            query: query.into(),
        }
    }

    /// Creates a Discarded event.
    pub fn discarded(branch: QueryBranch, query: impl Into<String>) -> Self {
        Self::Discarded {
            branch,
            query: query.into(),
        }
    }
}
