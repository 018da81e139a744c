use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Six ordered experience buckets shared by jobs and résumés.
///
/// The display labels (including the en dash) are the wire format consumed by
/// the job-board frontend; do not reword them without a migration on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, AsRefStr)]
pub enum ExperienceLevel {
    #[serde(rename = "Intern / Fresher")]
    #[strum(serialize = "Intern / Fresher")]
    InternFresher,
    #[serde(rename = "0–1 years")]
    #[strum(serialize = "0–1 years")]
    Years0To1,
    #[serde(rename = "1–3 years")]
    #[strum(serialize = "1–3 years")]
    Years1To3,
    #[serde(rename = "3–5 years")]
    #[strum(serialize = "3–5 years")]
    Years3To5,
    #[serde(rename = "5–10 years")]
    #[strum(serialize = "5–10 years")]
    Years5To10,
    #[serde(rename = "10+ years")]
    #[strum(serialize = "10+ years")]
    Years10Plus,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::InternFresher => "Intern / Fresher",
            ExperienceLevel::Years0To1 => "0–1 years",
            ExperienceLevel::Years1To3 => "1–3 years",
            ExperienceLevel::Years3To5 => "3–5 years",
            ExperienceLevel::Years5To10 => "5–10 years",
            ExperienceLevel::Years10Plus => "10+ years",
        }
    }

    /// Bucket a total-years figure. Half-open intervals, inclusive at 10.
    pub fn from_years(years: f64) -> Self {
        if years < 0.5 {
            ExperienceLevel::InternFresher
        } else if years < 1.0 {
            ExperienceLevel::Years0To1
        } else if years < 3.0 {
            ExperienceLevel::Years1To3
        } else if years < 5.0 {
            ExperienceLevel::Years3To5
        } else if years < 10.0 {
            ExperienceLevel::Years5To10
        } else {
            ExperienceLevel::Years10Plus
        }
    }

    /// Whether a candidate's total years sits inside this bucket's numeric
    /// range. Bounds are inclusive; the ranking bonus depends on this.
    pub fn contains_years(&self, years: f64) -> bool {
        match self {
            ExperienceLevel::InternFresher | ExperienceLevel::Years0To1 => years <= 1.0,
            ExperienceLevel::Years1To3 => (1.0..=3.0).contains(&years),
            ExperienceLevel::Years3To5 => (3.0..=5.0).contains(&years),
            ExperienceLevel::Years5To10 => (5.0..=10.0).contains(&years),
            ExperienceLevel::Years10Plus => years >= 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    #[strum(serialize = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    #[strum(serialize = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Freelance => "Freelance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum WorkMode {
    Remote,
    Hybrid,
    #[serde(rename = "On-site")]
    #[strum(serialize = "On-site")]
    OnSite,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::Hybrid => "Hybrid",
            WorkMode::OnSite => "On-site",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    #[strum(serialize = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    #[strum(serialize = "11-50")]
    UpTo50,
    #[serde(rename = "51-200")]
    #[strum(serialize = "51-200")]
    UpTo200,
    #[serde(rename = "201-1000")]
    #[strum(serialize = "201-1000")]
    UpTo1000,
    #[serde(rename = "1000+")]
    #[strum(serialize = "1000+")]
    Over1000,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::UpTo10 => "1-10",
            CompanySize::UpTo50 => "11-50",
            CompanySize::UpTo200 => "51-200",
            CompanySize::UpTo1000 => "201-1000",
            CompanySize::Over1000 => "1000+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Inr,
    Gbp,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Inr => "INR",
            Currency::Gbp => "GBP",
        }
    }
}

/// Provenance tag for a posting. Feeds declare theirs via `NormalizerConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum JobSource {
    #[serde(rename = "Google Jobs")]
    #[strum(serialize = "Google Jobs")]
    GoogleJobs,
    LinkedIn,
    Glassdoor,
    Indeed,
    Other,
}

impl JobSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobSource::GoogleJobs => "Google Jobs",
            JobSource::LinkedIn => "LinkedIn",
            JobSource::Glassdoor => "Glassdoor",
            JobSource::Indeed => "Indeed",
            JobSource::Other => "Other",
        }
    }
}

/// Relative posted-date windows offered by the filter UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum PostedWindow {
    #[default]
    #[serde(rename = "Any time")]
    #[strum(serialize = "Any time")]
    AnyTime,
    #[serde(rename = "Last 24 hours")]
    #[strum(serialize = "Last 24 hours")]
    Last24Hours,
    #[serde(rename = "Last 3 days")]
    #[strum(serialize = "Last 3 days")]
    Last3Days,
    #[serde(rename = "Last 7 days")]
    #[strum(serialize = "Last 7 days")]
    Last7Days,
    #[serde(rename = "Last 30 days")]
    #[strum(serialize = "Last 30 days")]
    Last30Days,
}

impl PostedWindow {
    /// Window size in days; `None` means no cutoff.
    pub fn days(&self) -> Option<i64> {
        match self {
            PostedWindow::AnyTime => None,
            PostedWindow::Last24Hours => Some(1),
            PostedWindow::Last3Days => Some(3),
            PostedWindow::Last7Days => Some(7),
            PostedWindow::Last30Days => Some(30),
        }
    }
}

/// Discrete label attached to a compatibility score. Both scoring policies
/// produce these labels but from different thresholds; see `matching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr)]
pub enum MatchLevel {
    Low,
    Medium,
    High,
}

impl MatchLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLevel::Low => "Low",
            MatchLevel::Medium => "Medium",
            MatchLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub size: CompanySize,
    pub industry: String,
    pub location: String,
}

/// Canonical job record. Built once by the normalizer and treated as
/// immutable afterwards; filtering and scoring never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: Company,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    pub currency: Currency,
    pub experience_level: ExperienceLevel,
    pub job_type: JobType,
    pub work_mode: WorkMode,
    pub source: JobSource,
    /// Lower-cased, deduplicated skill tokens (explicit tags plus keywords
    /// detected in the description).
    #[serde(default)]
    pub skills: Vec<String>,
    pub posted_at: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    pub apply_url: String,
}

/// Candidate attributes extracted from an uploaded résumé. Replaced wholesale
/// on every upload; a failed upload leaves the previous value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedResume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_experience_years: Option<f64>,
    pub skills: Vec<String>,
    pub preferred_locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inferred_experience_level: Option<ExperienceLevel>,
    /// Free-text résumé body when the upstream parser returns one. Feeds the
    /// advisor scorer's keyword scan; never displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

/// Filter criteria as held by the presentation layer. Empty strings and empty
/// lists mean "no constraint", never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub keyword: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_location: Option<WorkMode>,
    pub experience_levels: Vec<ExperienceLevel>,
    pub job_types: Vec<JobType>,
    pub work_modes: Vec<WorkMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    pub company_sizes: Vec<CompanySize>,
    pub posted_date: PostedWindow,
    pub job_sources: Vec<JobSource>,
    pub industries: Vec<String>,
    pub must_have_skills: Vec<String>,
}

/// One remembered search, snapshotting the filters that were active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuerySummary {
    pub keyword: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub filters_snapshot: FilterState,
}
