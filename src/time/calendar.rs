use chrono::{DateTime, Utc};

use super::holidays;
use super::resolver::{CivilTimeResolver, TzResolver};
use super::session::US_EQUITY_WINDOW;
use super::zone::REFERENCE_ZONE;
use crate::types::{CalendarDate, CivilTime, MarketStatus};

/// Stateless US market calendar bound to a civil-time resolver.
///
/// Every method is a pure function of its arguments; the resolver is the
/// only collaborator and is used to place instants in US Eastern time.
#[derive(Debug, Clone, Default)]
pub struct MarketCalendar<R = TzResolver> {
    resolver: R,
}

impl MarketCalendar<TzResolver> {
    pub fn new() -> Self {
        MarketCalendar { resolver: TzResolver }
    }
}

impl<R: CivilTimeResolver> MarketCalendar<R> {
    pub fn with_resolver(resolver: R) -> Self {
        MarketCalendar { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Civil time of an instant in the reference zone
    pub fn reference_time(&self, instant: DateTime<Utc>) -> CivilTime {
        self.resolver.resolve(instant, REFERENCE_ZONE)
    }

    pub fn is_trading_day(&self, date: CalendarDate) -> bool {
        holidays::is_trading_day(date)
    }

    pub fn is_market_open(&self, instant: DateTime<Utc>) -> bool {
        self.market_status(instant).is_open()
    }

    pub fn market_status(&self, instant: DateTime<Utc>) -> MarketStatus {
        US_EQUITY_WINDOW.classify(&self.reference_time(instant))
    }

    pub fn days_until_next_trading_day(&self, date: CalendarDate) -> u32 {
        holidays::days_until_next_trading_day(date)
    }
}
