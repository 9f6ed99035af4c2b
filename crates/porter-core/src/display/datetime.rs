//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

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

/// Elapsed time between two timestamps, rounded to milliseconds.
pub struct Elapsed<'a>(pub &'a Timestamp, pub &'a Timestamp);

impl fmt::Display for Elapsed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.1.as_millisecond() - self.0.as_millisecond();
        if millis < 1000 {
            write!(f, "{}ms", millis.max(0))
        } else {
            write!(f, "{}.{:03}s", millis / 1000, millis % 1000)
        }
    }
}
