//! Multi-strategy link resolution for one event.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{LinkDirectory, LinkEntry};
use crate::normalize::normalize_name;

/// Which lookup strategy selected the directory entry for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// Directory key equals the extracted teacher name.
    ExactTeacher,
    /// Directory key equals the normalized teacher name.
    NormalizedTeacher,
    /// Directory key equals the full subject text.
    FullSubject,
    /// Directory key equals the normalized subject text.
    NormalizedSubject,
    /// Case-insensitive substring overlap between a key and the
    /// normalized teacher name, in directory order.
    Partial,
}

/// Links attached to one event, plus the strategy that found them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedLinks {
    pub meeting_link: Option<String>,
    pub classroom_link: Option<String>,
    pub strategy: Option<MatchStrategy>,
}

/// Resolve the meeting and classroom links for one event.
///
/// The strategies run in a fixed order and the first that selects an
/// entry wins. From the selected entry, the meeting link comes from the
/// field named by `location` ("zoom" or "meet", case-insensitive after
/// trimming); the classroom link is attached whenever the entry carries
/// one, independent of location. A miss on every strategy is a valid
/// outcome, not an error.
pub fn resolve_links(
    teacher_name: Option<&str>,
    subject: &str,
    location: &str,
    directory: &LinkDirectory,
) -> ResolvedLinks {
    let Some((entry, strategy)) = select_entry(teacher_name, subject, directory) else {
        debug!(subject, "no link entry matched");
        return ResolvedLinks::default();
    };
    debug!(subject, ?strategy, "link entry selected");

    let mut resolved = ResolvedLinks {
        strategy: Some(strategy),
        ..Default::default()
    };

    match location.trim().to_lowercase().as_str() {
        "zoom" => resolved.meeting_link = entry.zoom.clone().filter(|v| !v.is_empty()),
        "meet" => resolved.meeting_link = entry.meet.clone().filter(|v| !v.is_empty()),
        _ => {}
    }

    resolved.classroom_link = entry.classroom.clone().filter(|v| !v.is_empty());

    resolved
}

fn select_entry<'a>(
    teacher_name: Option<&str>,
    subject: &str,
    directory: &'a LinkDirectory,
) -> Option<(&'a LinkEntry, MatchStrategy)> {
    if let Some(name) = teacher_name {
        if let Some(entry) = directory.get(name) {
            return Some((entry, MatchStrategy::ExactTeacher));
        }
        if let Some(entry) = directory.get(&normalize_name(name)) {
            return Some((entry, MatchStrategy::NormalizedTeacher));
        }
    }

    if let Some(entry) = directory.get(subject) {
        return Some((entry, MatchStrategy::FullSubject));
    }
    if let Some(entry) = directory.get(&normalize_name(subject)) {
        return Some((entry, MatchStrategy::NormalizedSubject));
    }

    if let Some(name) = teacher_name {
        let needle = normalize_name(name);
        for (key, entry) in directory.iter() {
            let key_lower = key.to_lowercase();
            if key_lower.contains(&needle) || needle.contains(&key_lower) {
                return Some((entry, MatchStrategy::Partial));
            }
        }
    }

    None
}
