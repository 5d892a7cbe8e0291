/// Core type definitions for the market clock
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ClockError, Result};
use crate::time::Zone;

/// Civil date in whatever zone it was resolved in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build from year, 1-based month and day-of-month
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| {
                ClockError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day))
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0 = January .. 11 = December)
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), 0 | 6)
    }

    /// The following civil day, `None` past the end of the representable calendar
    pub fn next_day(&self) -> Option<Self> {
        self.0.succ_opt().map(CalendarDate)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Date and wall-clock time of an instant as seen in one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub date: CalendarDate,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        CivilTime {
            date: CalendarDate(datetime.date()),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
        }
    }

    /// Minutes since midnight; seconds are dropped
    pub fn minutes_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// 12-hour clock hour (1-12) and its AM/PM marker
    pub fn hour12(&self) -> (u32, &'static str) {
        let marker = if self.hour >= 12 { "PM" } else { "AM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        (hour, marker)
    }
}

/// Market state at an instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketStatus {
    Open,
    PreMarket,
    Closed,
}

impl MarketStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, MarketStatus::Open)
    }

    /// Status class used by display surfaces
    pub fn as_str(&self) -> &str {
        match self {
            MarketStatus::Open => "open",
            MarketStatus::PreMarket => "after-hours",
            MarketStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MarketStatus::Open => "Market Open (Trading)",
            MarketStatus::PreMarket => "Pre-Market",
            MarketStatus::Closed => "Market Closed",
        }
    }
}

/// How snapshots are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Terminal,
    Json,
}

/// Application configuration (loaded from TOML)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Zone for the clock, the date and the market hours line
    #[serde(default)]
    pub display_timezone: Zone,

    /// Extra zone shown next to the clock
    #[serde(default = "default_secondary_timezone")]
    pub secondary_timezone: Zone,

    #[serde(default = "default_secondary_label")]
    pub secondary_label: String,

    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    #[serde(default)]
    pub compact: bool,

    #[serde(default)]
    pub output: OutputMode,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_secondary_timezone() -> Zone {
    Zone::Named(chrono_tz::Asia::Kolkata)
}

fn default_secondary_label() -> String {
    "India".to_string()
}

fn default_refresh_interval_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display_timezone: Zone::Local,
            secondary_timezone: default_secondary_timezone(),
            secondary_label: default_secondary_label(),
            refresh_interval_ms: default_refresh_interval_ms(),
            compact: false,
            output: OutputMode::Terminal,
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_components() {
        let date = CalendarDate::from_ymd(2024, 11, 28).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month0(), 10);
        assert_eq!(date.day(), 28);
        assert_eq!(date.weekday(), 4); // Thursday
        assert_eq!(date.to_string(), "2024-11-28");
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = CalendarDate::from_ymd(2023, 2, 29).unwrap_err();
        assert_eq!(err.error_code(), "CAL_002");
    }

    #[test]
    fn test_hour12() {
        let date = CalendarDate::from_ymd(2024, 1, 2).unwrap();
        let midnight = CivilTime { date, hour: 0, minute: 5, second: 0 };
        let noon = CivilTime { date, hour: 12, minute: 0, second: 0 };
        let evening = CivilTime { date, hour: 21, minute: 45, second: 10 };
        assert_eq!(midnight.hour12(), (12, "AM"));
        assert_eq!(noon.hour12(), (12, "PM"));
        assert_eq!(evening.hour12(), (9, "PM"));
        assert_eq!(evening.minutes_of_day(), 21 * 60 + 45);
    }

    #[test]
    fn test_status_classes() {
        assert_eq!(MarketStatus::Open.as_str(), "open");
        assert_eq!(MarketStatus::PreMarket.as_str(), "after-hours");
        assert_eq!(MarketStatus::Closed.label(), "Market Closed");
    }
}
