/// Instant to civil-time resolution
use chrono::{DateTime, Local, Utc};

use super::zone::Zone;
use crate::types::CivilTime;

/// Resolves an absolute instant into the date and wall-clock time of a zone.
///
/// Market logic only depends on this capability, so tests can pin the
/// civil time directly and other timezone backends can be swapped in.
pub trait CivilTimeResolver: Send + Sync {
    fn resolve(&self, instant: DateTime<Utc>, zone: Zone) -> CivilTime;
}

/// chrono-tz backed resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct TzResolver;

impl CivilTimeResolver for TzResolver {
    fn resolve(&self, instant: DateTime<Utc>, zone: Zone) -> CivilTime {
        let naive = match zone {
            Zone::Local => instant.with_timezone(&Local).naive_local(),
            Zone::Named(tz) => instant.with_timezone(&tz).naive_local(),
        };
        CivilTime::from_naive(naive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::time::REFERENCE_ZONE;

    #[test]
    fn test_resolve_eastern_dst() {
        // 14:30 UTC is 09:30 EST in winter and 10:30 EDT in summer
        let winter = Utc.with_ymd_and_hms(2024, 1, 10, 14, 30, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 10, 14, 30, 0).unwrap();

        let w = TzResolver.resolve(winter, REFERENCE_ZONE);
        let s = TzResolver.resolve(summer, REFERENCE_ZONE);

        assert_eq!((w.hour, w.minute), (9, 30));
        assert_eq!((s.hour, s.minute), (10, 30));
    }

    #[test]
    fn test_resolve_crosses_date_line() {
        // 20:00 UTC is already the next day in India
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();
        let civil = TzResolver.resolve(instant, Zone::Named(chrono_tz::Asia::Kolkata));
        assert_eq!(civil.date.day(), 2);
        assert_eq!((civil.hour, civil.minute), (1, 30));
    }
}
