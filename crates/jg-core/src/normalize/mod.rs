pub mod salary;

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::corrections::{correct_job_type, correct_work_mode, infer_experience_level};
use crate::ids;
use crate::schema::{Company, CompanySize, Currency, Job, JobSource, WorkMode};
use crate::skills::{extract_skills, normalize_skill_list, SkillVocabulary};

pub use salary::{detect_currency, parse_salary_range};

/// Company id used when the feed gives us no company name at all.
const COMPANY_SENTINEL_ID: &str = "unknown-company";

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Per-feed normalization settings. One authoritative normalizer serves every
/// feed; only these knobs vary between sources.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Provenance tag stamped on every job from this feed.
    pub source: JobSource,
    /// Work mode assumed when the record carries no usable hint. Remote-only
    /// boards set Remote here.
    pub default_work_mode: WorkMode,
    pub vocabulary: SkillVocabulary,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            source: JobSource::Other,
            default_work_mode: WorkMode::Remote,
            vocabulary: SkillVocabulary::default(),
        }
    }
}

/// Converts one raw feed record into a canonical `Job`. Never fails: every
/// field the record cannot supply falls back to its documented default, and a
/// record that is not a JSON object yields an all-defaults job.
pub fn normalize_job(raw: &Value, config: &NormalizerConfig) -> Job {
    static EMPTY: Lazy<Map<String, Value>> = Lazy::new(Map::new);

    let obj = match raw.as_object() {
        Some(obj) => obj,
        None => {
            tracing::warn!(kind = raw_kind(raw), "raw job record is not an object");
            &EMPTY
        }
    };

    let title = obj_str(obj, &["title"])
        .unwrap_or("Untitled role")
        .to_string();

    let company_name = read_company_name(obj).unwrap_or_else(|| "Unknown company".to_string());
    let company_id = if read_company_name(obj).is_some() {
        company_slug(&company_name)
    } else {
        COMPANY_SENTINEL_ID.to_string()
    };

    let location = obj_str(obj, &["candidate_required_location", "location"])
        .unwrap_or("Remote")
        .to_string();

    let apply_url = obj_str(obj, &["url", "apply_url"]).unwrap_or("").to_string();
    let id = read_id(obj).unwrap_or_else(|| {
        if apply_url.is_empty() {
            ids::synthesized_id()
        } else {
            ids::url_digest_id(&apply_url)
        }
    });

    let posted_at = read_posted_at(obj).unwrap_or_else(Utc::now);

    let salary_raw = read_salary_text(obj);
    let (salary_min, salary_max) = parse_salary_range(&salary_raw);
    let currency = detect_currency(&salary_raw);

    let description = obj_str(obj, &["description"]).unwrap_or("").to_string();

    let explicit_tags = obj_string_list(obj, &["tags", "skills"]);
    let mut skill_set = normalize_skill_list(&explicit_tags);
    let mut seen: HashSet<String> = skill_set.iter().cloned().collect();
    for extracted in extract_skills(&description, &config.vocabulary) {
        if seen.insert(extracted.clone()) {
            skill_set.push(extracted);
        }
    }

    let work_mode_raw = obj_str(obj, &["work_mode", "workplace_type"]).unwrap_or("");
    let job_type_raw = obj_str(obj, &["job_type", "employment_type"]).unwrap_or("");

    Job {
        id,
        title: title.clone(),
        company: Company {
            id: company_id,
            name: company_name,
            logo_url: obj_str(obj, &["company_logo", "logo"]).map(str::to_string),
            size: read_company_size(obj),
            industry: obj_str(obj, &["industry", "category"])
                .unwrap_or("Software")
                .to_string(),
            location: location.clone(),
        },
        location,
        salary_min,
        salary_max,
        currency,
        experience_level: infer_experience_level(&title),
        job_type: correct_job_type(job_type_raw),
        work_mode: correct_work_mode(work_mode_raw, config.default_work_mode),
        source: config.source,
        skills: skill_set,
        posted_at,
        description,
        responsibilities: obj_string_list(obj, &["responsibilities"]),
        required_skills: obj_string_list(obj, &["required_skills", "requirements"]),
        nice_to_have_skills: obj_string_list(obj, &["nice_to_have_skills"]),
        apply_url,
    }
}

/// Normalizes a whole fetch batch, preserving feed order.
pub fn normalize_jobs(raws: &[Value], config: &NormalizerConfig) -> Vec<Job> {
    raws.iter().map(|raw| normalize_job(raw, config)).collect()
}

/// Lower-cased company name with whitespace runs collapsed to single hyphens.
fn company_slug(name: &str) -> String {
    RE_WHITESPACE
        .replace_all(name.trim().to_lowercase().as_str(), "-")
        .into_owned()
}

fn raw_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// First non-empty string value among `keys`, trimmed.
fn obj_str<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// First array value among `keys`, as trimmed non-empty strings.
fn obj_string_list(obj: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key).and_then(Value::as_array))
        .next()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn read_company_name(obj: &Map<String, Value>) -> Option<String> {
    if let Some(name) = obj_str(obj, &["company_name"]) {
        return Some(name.to_string());
    }

    match obj.get("company") {
        Some(Value::String(name)) if !name.trim().is_empty() => Some(name.trim().to_string()),
        Some(Value::Object(company)) => obj_str(company, &["name"]).map(str::to_string),
        _ => None,
    }
}

fn read_id(obj: &Map<String, Value>) -> Option<String> {
    match obj.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => Some(id.trim().to_string()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}

fn read_salary_text(obj: &Map<String, Value>) -> String {
    match obj.get("salary") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(amount)) => amount.to_string(),
        _ => String::new(),
    }
}

fn read_company_size(obj: &Map<String, Value>) -> CompanySize {
    obj_str(obj, &["company_size", "size"])
        .and_then(parse_company_size)
        .unwrap_or(CompanySize::UpTo10)
}

fn parse_company_size(raw: &str) -> Option<CompanySize> {
    match raw.trim() {
        "1-10" => Some(CompanySize::UpTo10),
        "11-50" => Some(CompanySize::UpTo50),
        "51-200" => Some(CompanySize::UpTo200),
        "201-1000" => Some(CompanySize::UpTo1000),
        "1000+" => Some(CompanySize::Over1000),
        _ => None,
    }
}

fn read_posted_at(obj: &Map<String, Value>) -> Option<DateTime<Utc>> {
    let raw = obj_str(obj, &["publication_date", "posted_at", "created_at"])?;

    match parse_timestamp(raw) {
        Some(parsed) => Some(parsed),
        None => {
            tracing::warn!(value = raw, "unparseable posted timestamp; using now");
            None
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}
