//! DateTime display utilities.
//!
//! Session start and end times are kept as UTC [`Timestamp`]s and shown in
//! the system time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` shown in the system time zone.
///
/// The full format is `YYYY-MM-DD HH:MM:SS TZ`; [`LocalDateTime::time_only`]
/// drops the date for same-day displays such as a session start.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> LocalDateTime<'a> {
    /// Formats only the wall-clock time as `HH:MM`.
    pub fn time_only(self) -> LocalTime<'a> {
        LocalTime(self.0)
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Wall-clock time of a `Timestamp` in the system time zone.
pub struct LocalTime<'a>(&'a Timestamp);

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_follow_patterns() {
        let ts = Timestamp::from_second(1_640_995_200).unwrap();

        let full = LocalDateTime(&ts).to_string();
        assert_eq!(full.rfind(' '), Some(19));
        assert_eq!(full.as_bytes()[4], b'-');
        assert_eq!(full.as_bytes()[13], b':');

        let time = LocalDateTime(&ts).time_only().to_string();
        assert_eq!(time.len(), 5);
        assert_eq!(time.as_bytes()[2], b':');
    }
}
