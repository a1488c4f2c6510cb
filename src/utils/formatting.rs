//! Text formatting utilities for the timeline viewer.
//!
//! This module provides helper functions for formatting timestamps and
//! durations in a human-readable way.

use rtimeline::Timestamp;

const SECOND: Timestamp = 1000;
const MINUTE: Timestamp = 60 * SECOND;
const HOUR: Timestamp = 60 * MINUTE;
const DAY: Timestamp = 24 * HOUR;

/// Formats a timestamp as elapsed time since the timeline epoch.
///
/// Days are only shown once the timestamp reaches a full day.
pub fn format_timestamp(ms: Timestamp) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.abs();
    let days = ms / DAY;
    let hours = (ms % DAY) / HOUR;
    let minutes = (ms % HOUR) / MINUTE;
    let seconds = (ms % MINUTE) / SECOND;

    if days > 0 {
        format!("{}{}d {:02}:{:02}:{:02}", sign, days, hours, minutes, seconds)
    } else {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    }
}

/// Formats a duration using its largest whole unit.
pub fn format_duration(ms: Timestamp) -> String {
    if ms >= DAY && ms % DAY == 0 {
        format!("{} d", ms / DAY)
    } else if ms >= HOUR && ms % HOUR == 0 {
        format!("{} h", ms / HOUR)
    } else if ms >= MINUTE && ms % MINUTE == 0 {
        format!("{} min", ms / MINUTE)
    } else if ms >= SECOND && ms % SECOND == 0 {
        format!("{} s", ms / SECOND)
    } else {
        format!("{} ms", ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "00:00:00");
        assert_eq!(format_timestamp(5 * MINUTE + 7 * SECOND), "00:05:07");
        assert_eq!(format_timestamp(DAY + 2 * HOUR), "1d 02:00:00");
        assert_eq!(format_timestamp(-90 * SECOND), "-00:01:30");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(15 * MINUTE), "15 min");
        assert_eq!(format_duration(2 * DAY), "2 d");
        assert_eq!(format_duration(90 * SECOND), "90 s");
        assert_eq!(format_duration(250), "250 ms");
    }
}
