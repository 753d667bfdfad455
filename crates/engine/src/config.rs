//! Engine settings.

use serde::{Deserialize, Serialize};

/// What to do when a row cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Stop at the first malformed row.
    #[default]
    FailFast,
    /// Parse every row and report all malformed ones together.
    /// No output is produced either way.
    Collect,
}

/// Options for the join step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinOptions {
    /// Fail instead of falling back to a zero summary when a traded
    /// instrument has no candles.
    pub require_candles: bool,
}

/// Settings for a full report run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub error_policy: ErrorPolicy,
    pub join: JoinOptions,
}

impl EngineConfig {
    /// Sets the malformed-row policy.
    #[must_use]
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Requires candle data for every traded instrument.
    #[must_use]
    pub fn with_required_candles(mut self, require_candles: bool) -> Self {
        self.join.require_candles = require_candles;
        self
    }
}
