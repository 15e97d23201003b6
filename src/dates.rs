//! Localized date parsing and the forward-carried date context.

use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Ukrainian genitive month names as they appear in timetable headers,
/// in calendar order.
const MONTHS: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];

// `<digits> <month token> <4-digit year>`, e.g. "13 жовтня 2025 р."
static DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s+(\S+)\s+(\d{4})").unwrap());

/// Resolve a month-name token to its 1-based month number.
fn month_number(token: &str) -> Option<u32> {
    MONTHS.iter().position(|m| *m == token).map(|i| i as u32 + 1)
}

/// Parse a header date string like `"13 жовтня 2025 р."`.
///
/// The day number is not range-checked: values outside the month roll
/// over into the following month(s). An unknown month token yields
/// `None`, which the parser treats as a row-skip signal.
pub fn parse_event_date(input: &str) -> Option<NaiveDate> {
    let caps = DATE.captures(input)?;
    let day: i64 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    first_of_month.checked_add_signed(Duration::try_days(day - 1)?)
}

/// Forward-carried date context.
///
/// Date headers mark only the first row of each day block; the rows below
/// inherit the most recently seen (day-of-week, date) pair. The context is
/// scoped to one parse invocation and never shared across calls.
#[derive(Debug, Clone, Default)]
pub struct DateContext {
    day_of_week: Option<String>,
    date: Option<String>,
}

impl DateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one date-grid row. The context only moves when both the
    /// day-of-week and date cells are non-empty; otherwise the previous
    /// pair is retained.
    pub fn observe(&mut self, day_of_week: &str, date: &str) {
        if !day_of_week.is_empty() && !date.is_empty() {
            self.day_of_week = Some(day_of_week.to_string());
            self.date = Some(date.to_string());
        }
    }

    /// `true` once a date header has been seen.
    pub fn is_set(&self) -> bool {
        self.date.is_some()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn day_of_week(&self) -> Option<&str> {
        self.day_of_week.as_deref()
    }
}
