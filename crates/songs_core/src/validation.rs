//! Validation rule set for song submissions.
//!
//! # Responsibility
//! - Check a creation request before it becomes a `Song`.
//! - Report every violated rule in one pass, tagged by wire field name.
//!
//! # Invariants
//! - Rules never short-circuit each other.
//! - Absent fields never cause a panic; they are "missing" or "non-matching".

use crate::model::song::TITLE_MAX_CHARS;
use serde::{Deserialize, Serialize};

pub const FIELD_TITLE: &str = "title";
pub const FIELD_ARTIST: &str = "artist";
pub const FIELD_RECOMMENDED_BY: &str = "recommendedBy";

const DISLIKED_TITLE: &str = "walk on the ocean";
const DISLIKED_ARTIST: &str = "toad the wet sprocket";
const DISLIKED_MESSAGE: &str = "I Hate that Song";

/// Song creation request as submitted by a caller.
///
/// Every field is optional at this level so that a request with nothing
/// filled in can still be evaluated and reported on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddSongRequest {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub recommended_by: Option<String>,
}

impl AddSongRequest {
    /// Convenience constructor for fully populated requests.
    pub fn new(
        title: impl Into<String>,
        artist: Option<&str>,
        recommended_by: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            artist: artist.map(str::to_string),
            recommended_by: Some(recommended_by.into()),
        }
    }
}

/// One field-tagged rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Outcome of running the rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns violations in rule order; empty when valid.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Valid => &[],
            Self::Invalid(violations) => violations,
        }
    }
}

/// Groups messages per field, keeping first-seen field order.
pub fn violations_by_field(violations: &[Violation]) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for violation in violations {
        match grouped
            .iter_mut()
            .find(|(field, _)| *field == violation.field)
        {
            Some((_, messages)) => messages.push(violation.message.clone()),
            None => grouped.push((violation.field.clone(), vec![violation.message.clone()])),
        }
    }
    grouped
}

type Rule = fn(&AddSongRequest) -> Vec<Violation>;

const RULES: &[Rule] = &[title_rule, recommended_by_rule, disliked_song_rule];

/// Runs every rule against `request` and collects all violations.
pub fn validate(request: &AddSongRequest) -> ValidationResult {
    let violations: Vec<Violation> = RULES.iter().flat_map(|rule| rule(request)).collect();
    if violations.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(violations)
    }
}

fn title_rule(request: &AddSongRequest) -> Vec<Violation> {
    match present(request.title.as_deref()) {
        None => vec![Violation::new(FIELD_TITLE, required_message(FIELD_TITLE))],
        Some(title) if title.chars().count() > TITLE_MAX_CHARS => vec![Violation::new(
            FIELD_TITLE,
            format!(
                "The {FIELD_TITLE} field must be a string with a maximum length of {TITLE_MAX_CHARS}."
            ),
        )],
        Some(_) => Vec::new(),
    }
}

fn recommended_by_rule(request: &AddSongRequest) -> Vec<Violation> {
    match present(request.recommended_by.as_deref()) {
        None => vec![Violation::new(
            FIELD_RECOMMENDED_BY,
            required_message(FIELD_RECOMMENDED_BY),
        )],
        Some(_) => Vec::new(),
    }
}

fn disliked_song_rule(request: &AddSongRequest) -> Vec<Violation> {
    let title_matches = request
        .title
        .as_deref()
        .is_some_and(|title| title.to_lowercase() == DISLIKED_TITLE);
    let artist_matches = request
        .artist
        .as_deref()
        .is_some_and(|artist| artist.to_lowercase() == DISLIKED_ARTIST);

    if title_matches && artist_matches {
        vec![
            Violation::new(FIELD_TITLE, DISLIKED_MESSAGE),
            Violation::new(FIELD_ARTIST, DISLIKED_MESSAGE),
        ]
    } else {
        Vec::new()
    }
}

// Null, empty and whitespace-only values all count as missing.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn required_message(field: &str) -> String {
    format!("The {field} field is required.")
}

#[cfg(test)]
mod tests {
    use super::{validate, violations_by_field, AddSongRequest, ValidationResult, Violation};

    fn fields(result: &ValidationResult) -> Vec<&str> {
        result
            .violations()
            .iter()
            .map(|violation| violation.field.as_str())
            .collect()
    }

    #[test]
    fn accepts_complete_request() {
        let request = AddSongRequest::new("Midnight Train", Some("Gladys Knight"), "Sam");
        assert_eq!(validate(&request), ValidationResult::Valid);
    }

    #[test]
    fn artist_is_optional() {
        let request = AddSongRequest::new("Untitled Demo", None, "Sam");
        assert!(validate(&request).is_valid());
    }

    #[test]
    fn empty_request_reports_every_required_field() {
        let result = validate(&AddSongRequest::default());
        assert_eq!(fields(&result), vec!["title", "recommendedBy"]);
    }

    #[test]
    fn whitespace_only_values_are_missing() {
        let request = AddSongRequest::new("   ", None, "\t");
        let result = validate(&request);
        assert_eq!(fields(&result), vec!["title", "recommendedBy"]);
    }

    #[test]
    fn title_length_limit_is_inclusive() {
        let at_limit = AddSongRequest::new("a".repeat(100), None, "Sam");
        assert!(validate(&at_limit).is_valid());

        let over_limit = AddSongRequest::new("a".repeat(101), None, "Sam");
        let result = validate(&over_limit);
        assert_eq!(fields(&result), vec!["title"]);
        assert!(result.violations()[0].message.contains("maximum length of 100"));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let request = AddSongRequest::new("é".repeat(100), None, "Sam");
        assert!(validate(&request).is_valid());
    }

    #[test]
    fn disliked_song_is_rejected_regardless_of_case() {
        for (title, artist) in [
            ("Walk On The Ocean", "Toad The Wet Sprocket"),
            ("walk on the ocean", "toad the wet sprocket"),
            ("WALK ON THE OCEAN", "TOAD THE WET SPROCKET"),
        ] {
            let result = validate(&AddSongRequest::new(title, Some(artist), "Sam"));
            assert_eq!(
                result.violations(),
                &[
                    Violation {
                        field: "title".to_string(),
                        message: "I Hate that Song".to_string(),
                    },
                    Violation {
                        field: "artist".to_string(),
                        message: "I Hate that Song".to_string(),
                    },
                ]
            );
        }
    }

    #[test]
    fn partial_matches_pass() {
        let same_title = AddSongRequest::new("Walk On The Ocean", Some("Someone Else"), "Sam");
        assert!(validate(&same_title).is_valid());

        let same_artist = AddSongRequest::new("All I Want", Some("Toad The Wet Sprocket"), "Sam");
        assert!(validate(&same_artist).is_valid());

        let no_artist = AddSongRequest::new("Walk On The Ocean", None, "Sam");
        assert!(validate(&no_artist).is_valid());
    }

    #[test]
    fn disliked_rule_combines_with_required_rules() {
        let request = AddSongRequest {
            title: Some("walk on the ocean".to_string()),
            artist: Some("toad the wet sprocket".to_string()),
            recommended_by: None,
        };
        let result = validate(&request);
        assert_eq!(fields(&result), vec!["recommendedBy", "title", "artist"]);
    }

    #[test]
    fn grouping_keeps_first_seen_field_order() {
        let violations = vec![
            Violation {
                field: "title".to_string(),
                message: "a".to_string(),
            },
            Violation {
                field: "artist".to_string(),
                message: "b".to_string(),
            },
            Violation {
                field: "title".to_string(),
                message: "c".to_string(),
            },
        ];
        let grouped = violations_by_field(&violations);
        assert_eq!(
            grouped,
            vec![
                ("title".to_string(), vec!["a".to_string(), "c".to_string()]),
                ("artist".to_string(), vec!["b".to_string()]),
            ]
        );
    }

    #[test]
    fn request_deserializes_from_camel_case_with_missing_fields() {
        let request: AddSongRequest =
            serde_json::from_str(r#"{"title":"Zebra","recommendedBy":"Sam"}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("Zebra"));
        assert_eq!(request.artist, None);
        assert_eq!(request.recommended_by.as_deref(), Some("Sam"));
    }
}
