/// Market session and timing utilities
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::New_York;

use super::holidays::is_trading_day;
use super::resolver::{CivilTimeResolver, TzResolver};
use super::zone::REFERENCE_ZONE;
use crate::types::{CalendarDate, CivilTime, MarketStatus};

/// Regular session as minutes of the reference-zone day, [open, close)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketWindow {
    pub open_minutes: u32,
    pub close_minutes: u32,
}

/// 09:30 - 16:00 US Eastern
pub const US_EQUITY_WINDOW: MarketWindow = MarketWindow {
    open_minutes: 9 * 60 + 30,
    close_minutes: 16 * 60,
};

impl MarketWindow {
    pub fn contains(&self, minutes_of_day: u32) -> bool {
        minutes_of_day >= self.open_minutes && minutes_of_day < self.close_minutes
    }

    /// Status for a civil time already resolved in the reference zone
    pub fn classify(&self, civil: &CivilTime) -> MarketStatus {
        if !is_trading_day(civil.date) {
            return MarketStatus::Closed;
        }

        let minutes = civil.minutes_of_day();
        if self.contains(minutes) {
            MarketStatus::Open
        } else if minutes < self.open_minutes {
            MarketStatus::PreMarket
        } else {
            MarketStatus::Closed
        }
    }

    /// Open and close instants of this window on a reference-zone date
    pub fn bounds_on(&self, date: CalendarDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let at = |minutes: u32| {
            New_York
                .with_ymd_and_hms(
                    date.year(),
                    date.month0() + 1,
                    date.day(),
                    minutes / 60,
                    minutes % 60,
                    0,
                )
                .earliest()
                .map(|t| t.with_timezone(&Utc))
        };

        Some((at(self.open_minutes)?, at(self.close_minutes)?))
    }
}

/// Check if the market is open at an instant
pub fn is_market_open(instant: DateTime<Utc>) -> bool {
    market_status(instant).is_open()
}

/// Open, pre-market or closed at an instant
pub fn market_status(instant: DateTime<Utc>) -> MarketStatus {
    let civil = TzResolver.resolve(instant, REFERENCE_ZONE);
    US_EQUITY_WINDOW.classify(&civil)
}

/// Get market timings for a reference-zone date
pub fn session_bounds(date: CalendarDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    US_EQUITY_WINDOW.bounds_on(date)
}
