//! Name and subject canonicalization for fuzzy link matching.
//!
//! Timetable cells and link-directory keys spell the same teacher many
//! ways ("проф. Іванов І.І.", "Іванов І.І.", "іванов і.і."). Matching
//! happens on a canonical form: lower-cased, unquoted, with academic
//! titles stripped and whitespace collapsed.

use regex::Regex;
use std::sync::LazyLock;

// Academic title abbreviations as they appear before names:
// проф. (professor), доц. (associate professor), викл. (lecturer),
// ст.викл. (senior lecturer), к.т.н. (candidate of technical sciences).
static TITLES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)проф\.|доц\.|викл\.|ст\.викл\.|к\.т\.н\.,?\s*").unwrap());

static QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"['"«»]"#).unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// A title immediately followed by `Surname I.I.`. The surname may contain
// an apostrophe (Дерев'янко).
static TEACHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:проф\.|доц\.|викл\.|ст\.викл\.|к\.т\.н\.,?\s*доц\.)\s*([А-ЯҐЄІЇ][а-яґєії']+\s+[А-ЯҐЄІЇ]\.[А-ЯҐЄІЇ]\.)",
    )
    .unwrap()
});

/// Canonicalize a teacher name or subject string for comparison.
///
/// Lower-cases, removes quotation characters and academic-title tokens,
/// collapses whitespace runs, and trims. Idempotent:
/// `normalize_name(normalize_name(x)) == normalize_name(x)`.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let unquoted = QUOTES.replace_all(&lowered, "");
    let untitled = TITLES.replace_all(&unquoted, "");
    WHITESPACE
        .replace_all(&untitled, " ")
        .trim()
        .to_string()
}

/// Extract a `Surname I.I.` teacher token from a subject string.
///
/// Matches an academic title immediately followed by the name. Only the
/// first teacher is returned when a subject names several; the timetables
/// list the responsible teacher first.
pub fn extract_teacher_name(subject: &str) -> Option<String> {
    TEACHER
        .captures(subject)
        .map(|caps| caps[1].trim().to_string())
}
