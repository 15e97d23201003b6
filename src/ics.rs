//! ICS export of parsed schedule events.
//!
//! Timestamps are emitted as floating (civil) date-times: the timetable
//! carries no offset, and the consuming calendar applies the fixed
//! timezone (see [`crate::payload::TIMEZONE`]).

use chrono::NaiveDateTime;
use icalendar::{
    Alarm, Calendar, CalendarDateTime, Component, DatePerhapsTime, Event as IcsEvent, EventLike,
    Trigger,
};
use uuid::Uuid;

use crate::event::ScheduleEvent;
use crate::payload;

/// Render an event list as one VCALENDAR with a VEVENT per event.
pub fn generate_ics(events: &[ScheduleEvent]) -> String {
    let mut calendar = Calendar::new();
    calendar.name("Розклад занять");

    for event in events {
        let mut ics_event = IcsEvent::new();
        ics_event.uid(&format!("{}@rozklad", Uuid::new_v4()));
        ics_event.summary(&event.subject);
        ics_event.starts(floating(event.start));
        ics_event.ends(floating(event.end));
        ics_event.description(&payload::build_description(event));

        if !event.location.is_empty() {
            ics_event.location(&event.location);
        }

        if let Some(ref link) = event.meeting_link {
            ics_event.add_property("URL", link);
        }

        // Every lesson gets the same 10-minute popup reminder.
        let trigger = Trigger::before_start(chrono::Duration::minutes(10));
        ics_event.alarm(Alarm::display("Нагадування", trigger));

        calendar.push(ics_event.done());
    }

    calendar.done().to_string()
}

fn floating(datetime: NaiveDateTime) -> DatePerhapsTime {
    DatePerhapsTime::DateTime(CalendarDateTime::Floating(datetime))
}
