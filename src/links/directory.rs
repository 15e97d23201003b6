//! The key → links lookup table and its construction.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RozkladResult;
use crate::grid::Grid;
use crate::normalize::normalize_name;

/// Links known for one teacher or subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom: Option<String>,
}

impl LinkEntry {
    pub fn is_empty(&self) -> bool {
        self.zoom.is_none() && self.meet.is_none() && self.classroom.is_none()
    }
}

/// Mapping from teacher-name/subject keys to link entries.
///
/// Insertion order is preserved: the partial-match resolution strategy
/// scans keys in order, so iteration must be deterministic. Keys are not
/// semantically unique — the same teacher may appear under the raw
/// spelling, the normalized spelling, and a full subject title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkDirectory {
    entries: Vec<(String, LinkEntry)>,
}

impl LinkDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, entry: LinkEntry) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((key, entry)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&LinkEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkEntry)> {
        self.entries.iter().map(|(k, entry)| (k.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a directory from `links.json` content: a JSON object mapping
    /// keys to link entries. Object order is kept.
    pub fn from_json(json: &str) -> RozkladResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a directory from a links spreadsheet grid.
    ///
    /// Column 0 holds the teacher or subject key; the remaining columns
    /// are probed for platform URLs by substring (`meet.google.com`,
    /// `zoom.us`, `classroom.google.com` — first hit per platform wins).
    /// The header row is skipped, and rows with no key or no recognizable
    /// link are ignored. Accepted rows are stored under the raw key and,
    /// when different, the normalized key.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut directory = LinkDirectory::new();

        for i in 1..grid.len() {
            let row = grid.row(i);
            if row.len() < 2 {
                continue;
            }
            let key = row[0].trim();
            if key.is_empty() {
                continue;
            }

            let mut entry = LinkEntry::default();
            for cell in &row[1..] {
                let cell = cell.trim();
                if cell.is_empty() {
                    continue;
                }
                let lower = cell.to_lowercase();
                if lower.contains("meet.google.com") && entry.meet.is_none() {
                    entry.meet = Some(cell.to_string());
                } else if lower.contains("zoom.us") && entry.zoom.is_none() {
                    entry.zoom = Some(cell.to_string());
                } else if lower.contains("classroom.google.com") && entry.classroom.is_none() {
                    entry.classroom = Some(cell.to_string());
                }
            }
            if entry.is_empty() {
                continue;
            }

            let normalized = normalize_name(key);
            directory.insert(key, entry.clone());
            if normalized != key {
                directory.insert(normalized, entry);
            }
        }

        directory
    }
}

impl FromIterator<(String, LinkEntry)> for LinkDirectory {
    fn from_iter<I: IntoIterator<Item = (String, LinkEntry)>>(iter: I) -> Self {
        let mut directory = LinkDirectory::new();
        for (key, entry) in iter {
            directory.insert(key, entry);
        }
        directory
    }
}

impl Serialize for LinkDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LinkDirectory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = LinkDirectory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of keys to link entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut directory = LinkDirectory::new();
                while let Some((key, entry)) = map.next_entry::<String, LinkEntry>()? {
                    directory.insert(key, entry);
                }
                Ok(directory)
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}

/// Extract a field value only when it is present and non-empty.
fn filled(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Combine two directories; `overrides` wins field by field.
///
/// Keys only in `base` are copied unchanged; keys only in `overrides` are
/// added. For shared keys, each of `zoom`/`meet`/`classroom` is replaced
/// only when the override value is present and non-empty, so a blank cell
/// in the override source never erases a known link. Neither input is
/// mutated.
pub fn merge_directories(base: &LinkDirectory, overrides: &LinkDirectory) -> LinkDirectory {
    let mut merged = base.clone();

    for (key, incoming) in overrides.iter() {
        match merged.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => {
                if let Some(zoom) = filled(&incoming.zoom) {
                    existing.zoom = Some(zoom);
                }
                if let Some(meet) = filled(&incoming.meet) {
                    existing.meet = Some(meet);
                }
                if let Some(classroom) = filled(&incoming.classroom) {
                    existing.classroom = Some(classroom);
                }
            }
            None => merged.entries.push((
                key.to_string(),
                LinkEntry {
                    zoom: filled(&incoming.zoom),
                    meet: filled(&incoming.meet),
                    classroom: filled(&incoming.classroom),
                },
            )),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(zoom: Option<&str>, meet: Option<&str>, classroom: Option<&str>) -> LinkEntry {
        LinkEntry {
            zoom: zoom.map(str::to_string),
            meet: meet.map(str::to_string),
            classroom: classroom.map(str::to_string),
        }
    }

    #[test]
    fn test_from_json_keeps_object_order() {
        let json = r#"{
            "Іванов І.І.": {"zoom": "https://zoom.us/1"},
            "Петренко П.П.": {"meet": "https://meet.google.com/abc", "classroom": ""}
        }"#;
        let directory = LinkDirectory::from_json(json).unwrap();

        let keys: Vec<&str> = directory.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Іванов І.І.", "Петренко П.П."]);
        assert_eq!(
            directory.get("Іванов І.І.").unwrap().zoom.as_deref(),
            Some("https://zoom.us/1")
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(LinkDirectory::from_json("[1, 2]").is_err());
        assert!(LinkDirectory::from_json("{").is_err());
    }

    #[test]
    fn test_merge_ignores_empty_override_fields() {
        let base: LinkDirectory = [(
            "Іванов І.І.".to_string(),
            entry(Some("https://zoom.us/1"), None, None),
        )]
        .into_iter()
        .collect();
        let overrides: LinkDirectory = [(
            "Іванов І.І.".to_string(),
            entry(Some(""), None, Some("https://classroom.google.com/c/1")),
        )]
        .into_iter()
        .collect();

        let merged = merge_directories(&base, &overrides);
        let result = merged.get("Іванов І.І.").unwrap();

        assert_eq!(
            result.zoom.as_deref(),
            Some("https://zoom.us/1"),
            "empty override must not erase the base link"
        );
        assert_eq!(
            result.classroom.as_deref(),
            Some("https://classroom.google.com/c/1")
        );
    }

    #[test]
    fn test_merge_replaces_with_non_empty_fields() {
        let base: LinkDirectory = [(
            "Іванов І.І.".to_string(),
            entry(Some("https://zoom.us/old"), None, None),
        )]
        .into_iter()
        .collect();
        let overrides: LinkDirectory = [(
            "Іванов І.І.".to_string(),
            entry(Some("https://zoom.us/new"), Some("https://meet.google.com/x"), None),
        )]
        .into_iter()
        .collect();

        let merged = merge_directories(&base, &overrides);
        let result = merged.get("Іванов І.І.").unwrap();

        assert_eq!(result.zoom.as_deref(), Some("https://zoom.us/new"));
        assert_eq!(result.meet.as_deref(), Some("https://meet.google.com/x"));
    }

    #[test]
    fn test_merge_adds_new_keys_and_keeps_base_only_keys() {
        let base: LinkDirectory = [(
            "Тільки-база".to_string(),
            entry(Some("https://zoom.us/base"), None, None),
        )]
        .into_iter()
        .collect();
        let overrides: LinkDirectory = [(
            "Тільки-перекриття".to_string(),
            entry(None, Some("https://meet.google.com/y"), None),
        )]
        .into_iter()
        .collect();

        let merged = merge_directories(&base, &overrides);

        assert!(merged.get("Тільки-база").is_some());
        assert!(merged.get("Тільки-перекриття").is_some());
        // Purity: inputs untouched.
        assert_eq!(base.len(), 1);
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_from_grid_detects_links_by_url_pattern() {
        let grid = Grid::from(vec![
            vec!["Викладач", "Посилання", "Інше"],
            vec![
                "проф. Іванов І.І.",
                "https://meet.google.com/abc-defg",
                "https://classroom.google.com/c/xyz",
            ],
            vec!["Петренко П.П.", "https://us02web.zoom.us/j/123"],
            vec!["Без посилань", "кабінет 215"],
            vec!["", "https://zoom.us/j/999"],
        ]);

        let directory = LinkDirectory::from_grid(&grid);

        // Header row, keyless rows, and linkless rows are dropped.
        assert!(directory.get("Викладач").is_none());
        assert!(directory.get("Без посилань").is_none());

        let ivanov = directory.get("проф. Іванов І.І.").unwrap();
        assert_eq!(ivanov.meet.as_deref(), Some("https://meet.google.com/abc-defg"));
        assert_eq!(
            ivanov.classroom.as_deref(),
            Some("https://classroom.google.com/c/xyz")
        );

        // Stored under the normalized key too.
        let normalized = directory.get("іванов і.і.").unwrap();
        assert_eq!(normalized.meet, ivanov.meet);

        let zoom = directory.get("Петренко П.П.").unwrap();
        assert_eq!(zoom.zoom.as_deref(), Some("https://us02web.zoom.us/j/123"));
    }
}
