use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    pub value: Decimal,
}

impl Price {
    pub const ZERO: Self = Self {
        value: Decimal::ZERO,
    };

    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Parses decimal text, accepting scientific notation as a fallback
    /// (`"1.5e2"`). Returns `None` for anything else.
    /// Digit-separator underscores are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        if text.contains('_') {
            return None;
        }
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
            .map(Self::new)
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// `self - rhs`, or `None` if the difference does not fit a `Decimal`.
    pub fn checked_sub(self, rhs: Self) -> Option<Decimal> {
        self.value.checked_sub(rhs.value)
    }
}


impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
