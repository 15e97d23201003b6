//! Timetable-grid parsing and meeting-link resolution.
//!
//! This crate turns three row-aligned spreadsheet grids (subjects, dates,
//! times) into an ordered list of calendar events, attaching each event's
//! online-meeting and virtual-classroom links from a link directory:
//! - `parse` drives row iteration, date forward-carry, and the skip rules
//! - `links` holds directories, merging, and multi-strategy resolution
//! - `ics` and `payload` format the result for downstream calendar tools
//!
//! Fetching spreadsheets and creating calendar entries are the caller's
//! job; the engine is synchronous and works only on in-memory data.

pub mod dates;
pub mod error;
pub mod event;
pub mod grid;
pub mod ics;
pub mod links;
pub mod normalize;
pub mod parse;
pub mod payload;
pub mod timeslot;

pub use error::{RozkladError, RozkladResult};
pub use event::ScheduleEvent;
pub use grid::Grid;
pub use links::{
    LinkDirectory, LinkEntry, MatchStrategy, ResolvedLinks, merge_directories, resolve_links,
};
pub use parse::{ParseReport, RowOutcome, ScheduleParser, SkipReason};
