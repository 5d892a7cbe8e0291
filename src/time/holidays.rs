/// US Market Holiday Calendar
use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::CalendarDate;

/// Lookahead cap for the next-trading-day scan
pub const MAX_LOOKAHEAD_DAYS: u32 = 7;

/// How a holiday lands on a concrete date in a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month and day every year
    Fixed { month0: u32, day: u32 },
    /// Nth occurrence (1-based) of a weekday in the month
    NthWeekday { month0: u32, weekday: Weekday, nth: u32 },
    /// Last occurrence of a weekday in the month
    LastWeekday { month0: u32, weekday: Weekday },
}

impl HolidayRule {
    pub fn month0(&self) -> u32 {
        match *self {
            HolidayRule::Fixed { month0, .. }
            | HolidayRule::NthWeekday { month0, .. }
            | HolidayRule::LastWeekday { month0, .. } => month0,
        }
    }

    /// Day-of-month the rule falls on in `year`
    pub fn day_in(&self, year: i32) -> Option<u32> {
        match *self {
            HolidayRule::Fixed { day, .. } => Some(day),
            HolidayRule::NthWeekday { month0, weekday, nth } => {
                let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?
                    .weekday()
                    .num_days_from_sunday();
                let target = weekday.num_days_from_sunday();
                Some(1 + (target + 7 - first) % 7 + 7 * nth.saturating_sub(1))
            }
            HolidayRule::LastWeekday { month0, weekday } => {
                let last = last_day_of_month(year, month0)?;
                let last_weekday = last.weekday().num_days_from_sunday();
                let target = weekday.num_days_from_sunday();
                Some(last.day() - (last_weekday + 7 - target) % 7)
            }
        }
    }

    pub fn date_in(&self, year: i32) -> Option<CalendarDate> {
        let day = self.day_in(year)?;
        CalendarDate::from_ymd(year, self.month0() + 1, day).ok()
    }

    pub fn matches(&self, date: CalendarDate) -> bool {
        date.month0() == self.month0() && self.day_in(date.year()) == Some(date.day())
    }
}

fn last_day_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    let first_of_next = if month0 >= 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)?
    };
    first_of_next.pred_opt()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub name: &'static str,
    pub rule: HolidayRule,
}

/// Recognized market holidays. Weekend holidays are not shifted to an
/// adjacent weekday.
pub static US_MARKET_HOLIDAYS: [Holiday; 6] = [
    Holiday {
        name: "New Year's Day",
        rule: HolidayRule::Fixed { month0: 0, day: 1 },
    },
    Holiday {
        name: "Independence Day",
        rule: HolidayRule::Fixed { month0: 6, day: 4 },
    },
    Holiday {
        name: "Christmas",
        rule: HolidayRule::Fixed { month0: 11, day: 25 },
    },
    Holiday {
        name: "Thanksgiving",
        rule: HolidayRule::NthWeekday { month0: 10, weekday: Weekday::Thu, nth: 4 },
    },
    Holiday {
        name: "Memorial Day",
        rule: HolidayRule::LastWeekday { month0: 4, weekday: Weekday::Mon },
    },
    Holiday {
        name: "Labor Day",
        rule: HolidayRule::NthWeekday { month0: 8, weekday: Weekday::Mon, nth: 1 },
    },
];

/// Holiday falling on `date`, if any
pub fn holiday_on(date: CalendarDate) -> Option<&'static Holiday> {
    US_MARKET_HOLIDAYS.iter().find(|h| h.rule.matches(date))
}

/// All recognized holidays of a year, in calendar order
pub fn holidays_in_year(year: i32) -> Vec<(&'static Holiday, CalendarDate)> {
    let mut holidays: Vec<_> = US_MARKET_HOLIDAYS
        .iter()
        .filter_map(|h| h.rule.date_in(year).map(|date| (h, date)))
        .collect();
    holidays.sort_by_key(|(_, date)| *date);
    holidays
}

/// Check if a date is a trading day (not weekend, not holiday)
pub fn is_trading_day(date: CalendarDate) -> bool {
    if date.is_weekend() {
        return false;
    }
    holiday_on(date).is_none()
}

/// Days from `date` to the next trading day, 1..=MAX_LOOKAHEAD_DAYS.
/// Returns MAX_LOOKAHEAD_DAYS when nothing is found within the horizon.
pub fn days_until_next_trading_day(date: CalendarDate) -> u32 {
    scan_forward(date, is_trading_day).0
}

/// Get next trading day within the lookahead horizon
pub fn next_trading_day(from_date: CalendarDate) -> Option<CalendarDate> {
    scan_forward(from_date, is_trading_day).1
}

fn scan_forward<F>(from: CalendarDate, is_trading: F) -> (u32, Option<CalendarDate>)
where
    F: Fn(CalendarDate) -> bool,
{
    let mut check = from;
    for offset in 1..=MAX_LOOKAHEAD_DAYS {
        check = match check.next_day() {
            Some(next) => next,
            None => break,
        };
        if is_trading(check) {
            return (offset, Some(check));
        }
    }
    (MAX_LOOKAHEAD_DAYS, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend() {
        let sat = date(2024, 1, 6);
        let sun = date(2024, 1, 7);
        assert!(!is_trading_day(sat));
        assert!(!is_trading_day(sun));
    }

    #[test]
    fn test_weekends_never_trade_across_a_year() {
        let mut d = date(2024, 1, 1);
        while d.year() == 2024 {
            if d.is_weekend() {
                assert!(!is_trading_day(d), "{} is a weekend", d);
            }
            d = d.next_day().unwrap();
        }
    }

    #[test]
    fn test_fixed_holidays() {
        assert!(!is_trading_day(date(2024, 1, 1))); // Monday
        assert!(!is_trading_day(date(2024, 7, 4)));
        assert!(!is_trading_day(date(2024, 12, 25)));
    }

    #[test]
    fn test_thanksgiving() {
        assert!(!is_trading_day(date(2024, 11, 28)));
        assert!(is_trading_day(date(2024, 11, 29)));
        // November 1st on a Thursday
        assert!(!is_trading_day(date(2018, 11, 22)));
        assert!(is_trading_day(date(2018, 11, 29)));
    }

    #[test]
    fn test_memorial_day() {
        assert!(!is_trading_day(date(2024, 5, 27)));
        // May 31st on a Monday
        assert!(!is_trading_day(date(2021, 5, 31)));
        assert!(is_trading_day(date(2021, 5, 24)));
    }

    #[test]
    fn test_labor_day() {
        assert!(!is_trading_day(date(2024, 9, 2)));
        // September 1st on a Monday
        assert!(!is_trading_day(date(2025, 9, 1)));
        assert!(is_trading_day(date(2025, 9, 8)));
    }

    #[test]
    fn test_regular_weekday() {
        let tue = date(2024, 3, 12);
        assert!(is_trading_day(tue));
    }

    #[test]
    fn test_weekend_holiday_not_shifted() {
        // July 4th 2026 is a Saturday; Friday the 3rd stays a trading day
        assert!(is_trading_day(date(2026, 7, 3)));
        assert!(!is_trading_day(date(2026, 7, 4)));
        assert!(is_trading_day(date(2026, 7, 6)));
    }

    #[test]
    fn test_holiday_names() {
        assert_eq!(holiday_on(date(2024, 11, 28)).map(|h| h.name), Some("Thanksgiving"));
        assert_eq!(holiday_on(date(2024, 9, 2)).map(|h| h.name), Some("Labor Day"));
        assert!(holiday_on(date(2024, 9, 3)).is_none());
    }

    #[test]
    fn test_holidays_in_year() {
        let days: Vec<String> = holidays_in_year(2024)
            .into_iter()
            .map(|(_, d)| d.to_string())
            .collect();
        assert_eq!(
            days,
            vec![
                "2024-01-01",
                "2024-05-27",
                "2024-07-04",
                "2024-09-02",
                "2024-11-28",
                "2024-12-25",
            ]
        );
    }

    #[test]
    fn test_friday_to_monday() {
        assert_eq!(days_until_next_trading_day(date(2024, 3, 8)), 3);
        assert_eq!(next_trading_day(date(2024, 3, 8)), Some(date(2024, 3, 11)));
    }

    #[test]
    fn test_long_weekends() {
        // Friday before Memorial Day
        assert_eq!(days_until_next_trading_day(date(2024, 5, 24)), 4);
        // Thanksgiving to Friday
        assert_eq!(days_until_next_trading_day(date(2024, 11, 28)), 1);
        // Christmas Eve (Tuesday) over Christmas
        assert_eq!(days_until_next_trading_day(date(2024, 12, 24)), 2);
    }

    #[test]
    fn test_lookahead_always_in_range() {
        let mut d = date(2023, 1, 1);
        let end = date(2027, 1, 1);
        while d < end {
            let days = days_until_next_trading_day(d);
            assert!((1..=MAX_LOOKAHEAD_DAYS).contains(&days), "{} -> {}", d, days);
            d = d.next_day().unwrap();
        }
    }

    #[test]
    fn test_scan_capped_when_nothing_trades() {
        let (days, found) = scan_forward(date(2024, 3, 8), |_| false);
        assert_eq!(days, MAX_LOOKAHEAD_DAYS);
        assert!(found.is_none());
    }

    #[test]
    fn test_scan_capped_at_calendar_end() {
        let last = CalendarDate::from(NaiveDate::MAX);
        assert_eq!(days_until_next_trading_day(last), MAX_LOOKAHEAD_DAYS);
    }
}
