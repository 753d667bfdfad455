pub mod account_id;
pub mod output_row;
pub mod price;
pub mod price_summary;
pub mod ticker;

pub use account_id::AccountId;
pub use output_row::{OutputRow, format_money};
pub use price::Price;
pub use price_summary::{PricePoint, PriceSummary};
pub use ticker::Ticker;
