pub mod candle;
mod fields;
pub mod position;
pub mod trade;

// Re-export for easier access
pub use candle::CandleRecord;
pub use position::AccountPosition;
pub use trade::TradeRecord;
