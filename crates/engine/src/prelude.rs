//! Prelude module for convenient imports.
//!
//! ```rust
//! use shortfall_engine::prelude::*;
//! ```

pub use crate::accumulator::{PositionMap, TradeAccumulator};
pub use crate::config::{EngineConfig, ErrorPolicy, JoinOptions};
pub use crate::error::{EngineError, EngineResult};
pub use crate::joiner::{join, make_row};
pub use crate::reducer::CandleReducer;
pub use crate::report::{RunStats, ShortfallReport};
