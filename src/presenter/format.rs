/// Snapshot formatting for display surfaces
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::time::{session_bounds, CivilTimeResolver, MarketCalendar, Zone};
use crate::types::{CivilTime, Config, MarketStatus};

pub const DAYS_OF_WEEK: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// What the hours line shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HoursInfo {
    /// Today's session in the display zone
    Session { open: String, close: String },
    OpensTomorrow,
    OpensIn { days: u32 },
    Unavailable,
}

impl fmt::Display for HoursInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursInfo::Session { open, close } => {
                write!(f, "Market Hours (Local Time) {} - {}", open, close)
            }
            HoursInfo::OpensTomorrow => f.write_str("Market opens tomorrow"),
            HoursInfo::OpensIn { days } => write!(f, "Market opens in {} days", days),
            HoursInfo::Unavailable => f.write_str("Market Hours (Local Time) unavailable"),
        }
    }
}

/// Everything a display surface needs for one refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub time: String,
    pub ampm: String,
    pub date: String,
    pub day: String,
    pub status: MarketStatus,
    pub market_text: String,
    pub status_class: String,
    pub hours: HoursInfo,
    pub secondary_label: String,
    pub secondary_time: String,
}

/// Build the snapshot for `instant`.
///
/// Clock, date and session hours are shown in the display zone; trading-day
/// and lookahead decisions use the reference-zone date.
pub fn build_snapshot<R: CivilTimeResolver>(
    calendar: &MarketCalendar<R>,
    config: &Config,
    instant: DateTime<Utc>,
) -> Snapshot {
    let resolver = calendar.resolver();
    let local = resolver.resolve(instant, config.display_timezone);
    let (hour12, ampm) = local.hour12();

    let reference = calendar.reference_time(instant);
    let status = calendar.market_status(instant);

    let hours = if calendar.is_trading_day(reference.date) {
        match session_bounds(reference.date) {
            Some((open, close)) => HoursInfo::Session {
                open: short_time(resolver, open, config.display_timezone),
                close: short_time(resolver, close, config.display_timezone),
            },
            None => HoursInfo::Unavailable,
        }
    } else {
        match calendar.days_until_next_trading_day(reference.date) {
            1 => HoursInfo::OpensTomorrow,
            days => HoursInfo::OpensIn { days },
        }
    };

    Snapshot {
        time: format!("{}:{:02}:{:02}", hour12, local.minute, local.second),
        ampm: ampm.to_string(),
        date: long_date(&local),
        day: DAYS_OF_WEEK[local.date.weekday() as usize].to_string(),
        status,
        market_text: status.label().to_string(),
        status_class: status.as_str().to_string(),
        hours,
        secondary_label: config.secondary_label.clone(),
        secondary_time: short_time(resolver, instant, config.secondary_timezone),
    }
}

/// `October 19, 2026`
fn long_date(civil: &CivilTime) -> String {
    format!(
        "{} {}, {}",
        MONTHS[civil.date.month0() as usize],
        civil.date.day(),
        civil.date.year()
    )
}

/// `9:30 AM`
fn short_time<R: CivilTimeResolver>(resolver: &R, instant: DateTime<Utc>, zone: Zone) -> String {
    let civil = resolver.resolve(instant, zone);
    let (hour12, ampm) = civil.hour12();
    format!("{}:{:02} {}", hour12, civil.minute, ampm)
}
