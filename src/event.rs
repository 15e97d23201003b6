//! The normalized calendar-event record produced by the parser.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single parsed timetable entry.
///
/// `start` and `end` are civil (wall-clock) timestamps with no UTC offset;
/// the downstream calendar inserter decides which fixed timezone they live
/// in (see [`crate::payload::TIMEZONE`]). Serialized field names follow the
/// wire shape the calendar collaborator expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub subject: String,
    /// Lesson type cell, e.g. "л" (lecture) or "пр" (practical).
    #[serde(rename = "type")]
    pub kind: String,
    /// Location cell: a room number or a platform name ("Zoom", "Meet").
    pub location: String,
    #[serde(rename = "startDateTime")]
    pub start: NaiveDateTime,
    #[serde(rename = "endDateTime")]
    pub end: NaiveDateTime,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: String,
    #[serde(rename = "teacherName", skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(rename = "meetingLink", skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(rename = "classroomLink", skip_serializing_if = "Option::is_none")]
    pub classroom_link: Option<String>,
}
