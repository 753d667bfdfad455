use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Parses integer text. A leading sign is accepted; whitespace is not.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse::<i64>().ok().map(Self)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
