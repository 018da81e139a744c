//! Résumé-parser response adaptation.
//!
//! The upstream parser returns a `{ data: { ... } }` envelope with nested
//! name/summary/skills structures. This adapter flattens that into a
//! `ParsedResume` and is deliberately infallible: whatever shape arrives,
//! missing pieces degrade to documented defaults. Upstream call failures are
//! the collaborator client's concern, not this module's.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::schema::{ExperienceLevel, ParsedResume};
use crate::skills::normalize_skill_list;

/// Converts a parser response body into a `ParsedResume`.
pub fn adapt_resume(response: &Value) -> ParsedResume {
    static EMPTY: Lazy<Map<String, Value>> = Lazy::new(Map::new);

    let data = response
        .get("data")
        .and_then(Value::as_object)
        .unwrap_or(&EMPTY);

    let years = read_total_years(data);

    ParsedResume {
        name: Some(read_name(data)),
        total_experience_years: Some(years),
        skills: read_skills(data),
        preferred_locations: read_locations(data),
        inferred_experience_level: Some(ExperienceLevel::from_years(years)),
        raw_text: data
            .get("rawText")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string),
    }
}

/// Full raw name when present, else first+last joined, else "Unknown".
fn read_name(data: &Map<String, Value>) -> String {
    let name = data.get("name");

    if let Some(raw) = name.and_then(|n| n.get("raw")).and_then(Value::as_str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let part = |key: &str| {
        name.and_then(|n| n.get(key))
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("")
    };
    let joined = [part("first"), part("last")]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        "Unknown".to_string()
    } else {
        joined
    }
}

/// Explicit total first, then the summary-level figure, then zero. Parser
/// glitches occasionally produce negatives; those clamp to zero.
fn read_total_years(data: &Map<String, Value>) -> f64 {
    data.get("totalYearsExperience")
        .and_then(Value::as_f64)
        .or_else(|| {
            data.get("summary")
                .and_then(|summary| summary.get("yearsExperience"))
                .and_then(Value::as_f64)
        })
        .unwrap_or(0.0)
        .max(0.0)
}

fn read_skills(data: &Map<String, Value>) -> Vec<String> {
    let names: Vec<String> = data
        .get("skills")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    normalize_skill_list(&names)
}

/// Raw location strings from the parser's location list; a single `location`
/// object is accepted for parsers that never send the plural form.
fn read_locations(data: &Map<String, Value>) -> Vec<String> {
    let entries: Vec<&Value> = match data.get("locations").and_then(Value::as_array) {
        Some(list) => list.iter().collect(),
        None => data.get("location").into_iter().collect(),
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            entry
                .get("rawInput")
                .or_else(|| entry.get("raw"))
                .and_then(Value::as_str)
        })
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_a_full_parser_response() {
        let response = json!({
            "data": {
                "name": { "raw": "Ada Lovelace", "first": "Ada", "last": "Lovelace" },
                "totalYearsExperience": 6.5,
                "skills": [
                    { "name": "React" },
                    { "name": "  " },
                    { "name": "AWS" }
                ],
                "locations": [
                    { "rawInput": "Berlin, Germany" },
                    { "rawInput": "" }
                ],
                "rawText": "Ada Lovelace. React and AWS engineer."
            }
        });

        let resume = adapt_resume(&response);

        assert_eq!(resume.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(resume.total_experience_years, Some(6.5));
        assert_eq!(resume.skills, vec!["react", "aws"]);
        assert_eq!(resume.preferred_locations, vec!["Berlin, Germany"]);
        assert_eq!(
            resume.inferred_experience_level,
            Some(ExperienceLevel::Years5To10)
        );
        assert!(resume.raw_text.is_some());
    }

    #[test]
    fn name_falls_back_to_joined_parts() {
        let resume = adapt_resume(&json!({
            "data": { "name": { "first": "Grace", "last": "Hopper" } }
        }));
        assert_eq!(resume.name.as_deref(), Some("Grace Hopper"));

        let first_only = adapt_resume(&json!({
            "data": { "name": { "first": "Grace", "last": "" } }
        }));
        assert_eq!(first_only.name.as_deref(), Some("Grace"));
    }

    #[test]
    fn nameless_response_reads_unknown() {
        let resume = adapt_resume(&json!({ "data": {} }));
        assert_eq!(resume.name.as_deref(), Some("Unknown"));
    }

    #[test]
    fn years_fall_back_to_summary_then_zero() {
        let summary_years = adapt_resume(&json!({
            "data": { "summary": { "yearsExperience": 2.9 } }
        }));
        assert_eq!(summary_years.total_experience_years, Some(2.9));
        assert_eq!(
            summary_years.inferred_experience_level,
            Some(ExperienceLevel::Years1To3)
        );

        let none = adapt_resume(&json!({ "data": {} }));
        assert_eq!(none.total_experience_years, Some(0.0));
        assert_eq!(
            none.inferred_experience_level,
            Some(ExperienceLevel::InternFresher)
        );
    }

    #[test]
    fn bucketing_is_inclusive_at_ten() {
        let resume = adapt_resume(&json!({
            "data": { "totalYearsExperience": 10 }
        }));
        assert_eq!(
            resume.inferred_experience_level,
            Some(ExperienceLevel::Years10Plus)
        );
    }

    #[test]
    fn negative_years_clamp_to_zero() {
        let resume = adapt_resume(&json!({
            "data": { "totalYearsExperience": -2 }
        }));
        assert_eq!(resume.total_experience_years, Some(0.0));
    }

    #[test]
    fn skills_are_lowercased_and_deduplicated() {
        let resume = adapt_resume(&json!({
            "data": { "skills": [ { "name": "React" }, { "name": "react" } ] }
        }));
        assert_eq!(resume.skills, vec!["react"]);
    }

    #[test]
    fn single_location_object_is_accepted() {
        let resume = adapt_resume(&json!({
            "data": { "location": { "rawInput": "Pune, India" } }
        }));
        assert_eq!(resume.preferred_locations, vec!["Pune, India"]);
    }

    #[test]
    fn missing_data_envelope_degrades_to_defaults() {
        let resume = adapt_resume(&json!({ "unexpected": true }));
        assert_eq!(resume.name.as_deref(), Some("Unknown"));
        assert_eq!(resume.total_experience_years, Some(0.0));
        assert!(resume.skills.is_empty());
        assert!(resume.preferred_locations.is_empty());
        assert!(resume.raw_text.is_none());
    }
}
