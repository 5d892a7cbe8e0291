pub mod types;
pub mod error;
pub mod time;
pub mod config;
pub mod presenter;

pub use types::*;
pub use error::{ClockError, Result};

pub use time::{days_until_next_trading_day, is_market_open, is_trading_day, MarketCalendar};
