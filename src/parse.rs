//! The row-iteration engine: grids in, ordered events out.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::dates::{DateContext, parse_event_date};
use crate::event::ScheduleEvent;
use crate::grid::Grid;
use crate::links::{LinkDirectory, MatchStrategy, merge_directories, resolve_links};
use crate::normalize::extract_teacher_name;
use crate::timeslot::parse_time_slot;

/// Administrative signature block embedded in timetable headers; a subject
/// cell containing it is decoration, not a lesson.
const APPROVAL_STAMP: &str = "ЗАТВЕРДЖУЮ";

/// Why a row produced no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Time column empty.
    NoTimeSlot,
    /// No date header seen yet.
    NoDateContext,
    /// Time cell did not look like "HH:MM - HH:MM".
    UnparsableTime,
    /// Subject cell empty or whitespace.
    EmptySubject,
    /// Subject cell belongs to the approval-stamp header.
    ApprovalStamp,
    /// Carried date did not match "<day> <month> <year>", or the month
    /// token is not a known month name.
    UnparsableDate,
}

/// Per-row outcome recorded in the parse report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowOutcome {
    /// Row produced `events[event_index]`; `strategy` says how its links
    /// were found, if they were.
    Event {
        event_index: usize,
        strategy: Option<MatchStrategy>,
    },
    Skipped(SkipReason),
}

/// One row's entry in the parse report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub row: usize,
    pub outcome: RowOutcome,
}

/// Everything one parse produced: the ordered events plus per-row
/// diagnostics. The report replaces the per-row console narration the
/// engine would otherwise need for debugging irregular sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    pub events: Vec<ScheduleEvent>,
    pub rows: Vec<RowRecord>,
}

/// The grid-to-event orchestrator.
///
/// Holds the (optional, pre-merged) link directory; each `parse` call
/// builds its own [`DateContext`], so one parser may be used for any
/// number of independent invocations.
#[derive(Debug, Clone, Default)]
pub struct ScheduleParser {
    directory: Option<LinkDirectory>,
}

impl ScheduleParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a link directory to resolve meeting/classroom links from.
    pub fn with_links(mut self, directory: LinkDirectory) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Attach a second directory with field-level priority over the first.
    /// When no base directory was set, the overrides become the directory.
    pub fn with_link_overrides(mut self, overrides: LinkDirectory) -> Self {
        self.directory = Some(match self.directory.take() {
            Some(base) => merge_directories(&base, &overrides),
            None => overrides,
        });
        self
    }

    /// Parse one timetable export.
    ///
    /// The three grids are row-aligned slices of the same sheet: subjects
    /// (subject/type/location columns), dates (day-of-week/date columns),
    /// and times (time-range column). Rows that fail any precondition are
    /// skipped silently and recorded in the report.
    pub fn parse(&self, subjects: &Grid, dates: &Grid, times: &Grid) -> ParseReport {
        let mut report = ParseReport::default();
        let mut context = DateContext::new();

        let row_count = subjects.len().max(dates.len()).max(times.len());
        for row in 0..row_count {
            let outcome = self.parse_row(subjects, dates, times, row, &mut context, &mut report.events);
            trace!(row, ?outcome);
            report.rows.push(RowRecord { row, outcome });
        }

        debug!(
            events = report.events.len(),
            rows = row_count,
            "schedule parsed"
        );
        report
    }

    fn parse_row(
        &self,
        subjects: &Grid,
        dates: &Grid,
        times: &Grid,
        row: usize,
        context: &mut DateContext,
        events: &mut Vec<ScheduleEvent>,
    ) -> RowOutcome {
        // A row carrying both the day-of-week and date cells starts a new
        // day block; the rows below it inherit the pair.
        context.observe(dates.cell(row, 0), dates.cell(row, 1));

        let time_cell = times.cell(row, 0);
        if time_cell.is_empty() {
            return RowOutcome::Skipped(SkipReason::NoTimeSlot);
        }
        let Some(date_string) = context.date() else {
            return RowOutcome::Skipped(SkipReason::NoDateContext);
        };
        let Some(slot) = parse_time_slot(time_cell) else {
            return RowOutcome::Skipped(SkipReason::UnparsableTime);
        };

        let subject = subjects.cell(row, 0);
        if subject.trim().is_empty() {
            return RowOutcome::Skipped(SkipReason::EmptySubject);
        }
        if subject.contains(APPROVAL_STAMP) {
            return RowOutcome::Skipped(SkipReason::ApprovalStamp);
        }

        let Some(date) = parse_event_date(date_string) else {
            return RowOutcome::Skipped(SkipReason::UnparsableDate);
        };

        // Midnight plus the raw hour/minute counts: out-of-range time
        // values roll over instead of failing, to match the permissive
        // time regex.
        let midnight = date.and_time(NaiveTime::MIN);
        let start = midnight
            + Duration::hours(i64::from(slot.start_hour))
            + Duration::minutes(i64::from(slot.start_min));
        let end = midnight
            + Duration::hours(i64::from(slot.end_hour))
            + Duration::minutes(i64::from(slot.end_min));

        let teacher_name = extract_teacher_name(subject);
        let location = subjects.cell(row, 2);

        let (meeting_link, classroom_link, strategy) = match &self.directory {
            Some(directory) => {
                let resolved =
                    resolve_links(teacher_name.as_deref(), subject, location, directory);
                (
                    resolved.meeting_link,
                    resolved.classroom_link,
                    resolved.strategy,
                )
            }
            None => (None, None, None),
        };

        let event = ScheduleEvent {
            subject: subject.trim().to_string(),
            kind: subjects.cell(row, 1).trim().to_string(),
            location: location.trim().to_string(),
            start,
            end,
            day_of_week: context.day_of_week().unwrap_or_default().to_string(),
            teacher_name,
            meeting_link,
            classroom_link,
        };
        debug!(subject = %event.subject, start = %event.start, "event parsed");

        events.push(event);
        RowOutcome::Event {
            event_index: events.len() - 1,
            strategy,
        }
    }
}
