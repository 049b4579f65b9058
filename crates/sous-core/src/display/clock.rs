//! Countdown display utilities.

use std::fmt;

/// A countdown value that renders as `minutes:seconds`.
///
/// Seconds are zero-padded to two digits and minutes are not wrapped into
/// hours, so `3725` renders as `62:05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(pub u32);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Formats a number of seconds as `m:ss`.
///
/// ```rust
/// use sous_core::display::format_time;
///
/// assert_eq!(format_time(5), "0:05");
/// assert_eq!(format_time(65), "1:05");
/// assert_eq!(format_time(0), "0:00");
/// ```
pub fn format_time(seconds: u32) -> String {
    Clock(seconds).to_string()
}
