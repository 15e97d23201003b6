//! Time-range parsing for the "HH:MM - HH:MM" column.

use regex::Regex;
use std::sync::LazyLock;

/// A raw clock range extracted from the time column.
///
/// Values are passed through unvalidated: the source timetables are
/// hand-maintained, and rejecting `99:99` here would change which rows
/// parse at all. Out-of-range values roll over when the wall-clock
/// timestamp is built (see [`crate::parse`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_hour: u32,
    pub start_min: u32,
    pub end_hour: u32,
    pub end_min: u32,
}

// Both the ASCII hyphen and the en dash occur in exported sheets.
static TIME_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2}):(\d{2})\s*[-–]\s*(\d{2}):(\d{2})").unwrap());

/// Parse a time-range token like `"09:00 - 10:30"`.
///
/// `None` means the cell carries no usable time slot; the parser treats
/// that as a row-skip signal, not an error.
pub fn parse_time_slot(input: &str) -> Option<TimeSlot> {
    let caps = TIME_RANGE.captures(input)?;
    Some(TimeSlot {
        start_hour: caps[1].parse().ok()?,
        start_min: caps[2].parse().ok()?,
        end_hour: caps[3].parse().ok()?,
        end_min: caps[4].parse().ok()?,
    })
}
