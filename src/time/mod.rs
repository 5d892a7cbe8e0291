pub mod zone;
pub mod resolver;
pub mod clock;
pub mod holidays;
pub mod session;
pub mod calendar;

pub use zone::{Zone, REFERENCE_ZONE};
pub use resolver::{CivilTimeResolver, TzResolver};
pub use clock::{Clock, FixedClock, SystemClock};
pub use holidays::{
    days_until_next_trading_day, holiday_on, holidays_in_year, is_trading_day, next_trading_day,
    Holiday, HolidayRule, MAX_LOOKAHEAD_DAYS, US_MARKET_HOLIDAYS,
};
pub use session::{is_market_open, market_status, session_bounds, MarketWindow, US_EQUITY_WINDOW};
pub use calendar::MarketCalendar;
