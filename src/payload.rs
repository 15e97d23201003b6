//! Formatting helpers for the downstream calendar-event creator.
//!
//! The engine itself performs no network calls; these helpers shape the
//! human-facing pieces of a calendar insertion (description text, color,
//! timezone name) so every consumer renders events the same way.

use crate::event::ScheduleEvent;

/// Fixed civil timezone all produced timestamps are interpreted in.
pub const TIMEZONE: &str = "Europe/Kyiv";

/// Google Calendar color id for a lesson type: л (lecture) blue,
/// пр (practical) green, ККР (module control) red, light blue otherwise.
pub fn color_id(kind: &str) -> &'static str {
    match kind {
        "л" => "9",
        "пр" => "10",
        "ККР" => "11",
        _ => "1",
    }
}

/// Human-readable event description: lesson type, day, teacher, and the
/// meeting link — or a platform placeholder when the location names a
/// platform but no link was resolved.
pub fn build_description(event: &ScheduleEvent) -> String {
    let mut description = format!("Тип: {}\nДень: {}", event.kind, event.day_of_week);

    if let Some(ref teacher) = event.teacher_name {
        description.push_str(&format!("\nВикладач: {teacher}"));
    }

    if let Some(ref link) = event.meeting_link {
        description.push_str(&format!("\n\n🔗 Посилання на заняття:\n{link}"));
    } else {
        let location = event.location.to_lowercase();
        if location.contains("zoom") {
            description.push_str("\n\n📹 Zoom (посилання буде надано викладачем)");
        } else if location.contains("meet") {
            description.push_str("\n\n📹 Google Meet (посилання буде надано викладачем)");
        }
    }

    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event() -> ScheduleEvent {
        ScheduleEvent {
            subject: "Вступ до фаху".to_string(),
            kind: "л".to_string(),
            location: "Zoom".to_string(),
            start: NaiveDate::from_ymd_opt(2025, 10, 13)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 10, 13)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            day_of_week: "Пн".to_string(),
            teacher_name: Some("Іванов І.І.".to_string()),
            meeting_link: None,
            classroom_link: None,
        }
    }

    #[test]
    fn test_color_ids() {
        assert_eq!(color_id("л"), "9");
        assert_eq!(color_id("пр"), "10");
        assert_eq!(color_id("ККР"), "11");
        assert_eq!(color_id("сем"), "1");
    }

    #[test]
    fn test_description_with_resolved_link() {
        let mut event = event();
        event.meeting_link = Some("https://zoom.us/1".to_string());

        let description = build_description(&event);
        assert!(description.starts_with("Тип: л\nДень: Пн"));
        assert!(description.contains("Викладач: Іванов І.І."));
        assert!(description.contains("https://zoom.us/1"));
    }

    #[test]
    fn test_description_placeholder_for_unresolved_platform() {
        let description = build_description(&event());
        assert!(description.contains("Zoom (посилання буде надано викладачем)"));
    }

    #[test]
    fn test_description_without_teacher_or_platform() {
        let mut event = event();
        event.teacher_name = None;
        event.location = "ауд. 215".to_string();

        let description = build_description(&event);
        assert_eq!(description, "Тип: л\nДень: Пн");
    }
}
