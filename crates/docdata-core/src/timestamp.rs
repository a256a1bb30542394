//! Calendar dates and date-times found in metadata values.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date or a date-time, parsed from text like `2015-05-08` or
/// `2015-05-08 14:15:16`.
///
/// Displays as ISO-8601: `2015-05-08` or `2015-05-08T14:15:16`.
///
/// ```rust
/// use docdata_core::Timestamp;
///
/// let ts: Timestamp = "2015-05-08 14:15:16".parse().unwrap();
/// assert!(ts.is_datetime());
/// assert_eq!(ts.to_string(), "2015-05-08T14:15:16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Timestamp {
    /// A calendar date with no time of day.
    Date(NaiveDate),
    /// A date with a time of day, no time zone.
    DateTime(NaiveDateTime),
}

impl Timestamp {
    /// The calendar date, dropping any time of day.
    pub fn date(&self) -> NaiveDate {
        match self {
            Timestamp::Date(date) => *date,
            Timestamp::DateTime(datetime) => datetime.date(),
        }
    }

    /// The date-time, or `None` for a plain date.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Timestamp::Date(_) => None,
            Timestamp::DateTime(datetime) => Some(*datetime),
        }
    }

    /// Check if a time of day is present.
    pub fn is_datetime(&self) -> bool {
        matches!(self, Timestamp::DateTime(_))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Timestamp::DateTime(datetime));
            }
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(Timestamp::Date)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Timestamp::DateTime(datetime) => {
                write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.f"))
            }
        }
    }
}
