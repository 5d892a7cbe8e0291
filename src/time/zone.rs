/// Timezone selection for display and market reference
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClockError;

/// Either the host's local zone or a named IANA zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    #[default]
    Local,
    Named(Tz),
}

/// US Eastern; all market determinations are made here
pub const REFERENCE_ZONE: Zone = Zone::Named(chrono_tz::America::New_York);

impl FromStr for Zone {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        s.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| ClockError::UnknownTimezone(s.to_string()))
    }
}

impl TryFrom<String> for Zone {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.to_string()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zones() {
        assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
        assert_eq!("LOCAL".parse::<Zone>().unwrap(), Zone::Local);
        assert_eq!(
            "Asia/Kolkata".parse::<Zone>().unwrap(),
            Zone::Named(chrono_tz::Asia::Kolkata)
        );
        assert_eq!(REFERENCE_ZONE.to_string(), "America/New_York");
    }

    #[test]
    fn test_unknown_zone() {
        let err = "Mars/Olympus_Mons".parse::<Zone>().unwrap_err();
        assert!(matches!(err, ClockError::UnknownTimezone(_)));
    }
}
