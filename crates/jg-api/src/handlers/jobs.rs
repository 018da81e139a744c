use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use jg_core::filtering::filter_jobs;
use jg_core::normalize::normalize_jobs;
use jg_core::schema::{FilterState, Job, PostedWindow};

use super::{parse_wire_label, parse_wire_labels};
use crate::error::ApiError;
use crate::state::SharedState;

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 100;

/// Query surface of `GET /api/jobs`. Enum-valued fields carry wire labels,
/// list fields comma-separated; everything is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JobsQuery {
    keyword: Option<String>,
    location: Option<String>,
    limit: Option<usize>,
    quick_location: Option<String>,
    experience_levels: Option<String>,
    job_types: Option<String>,
    work_modes: Option<String>,
    company_sizes: Option<String>,
    sources: Option<String>,
    industries: Option<String>,
    skills: Option<String>,
    salary_min: Option<u64>,
    salary_max: Option<u64>,
    posted_within: Option<String>,
}

impl JobsQuery {
    fn filter_state(&self) -> Result<FilterState, ApiError> {
        let quick_location = match self.quick_location.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(label) => Some(parse_wire_label("quick_location", label)?),
        };
        let posted_date = match self.posted_within.as_deref().map(str::trim) {
            None | Some("") => PostedWindow::default(),
            Some(label) => parse_wire_label("posted_within", label)?,
        };

        Ok(FilterState {
            keyword: self.keyword.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            quick_location,
            experience_levels: parse_wire_labels(
                "experience_levels",
                self.experience_levels.as_deref(),
            )?,
            job_types: parse_wire_labels("job_types", self.job_types.as_deref())?,
            work_modes: parse_wire_labels("work_modes", self.work_modes.as_deref())?,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            company_sizes: parse_wire_labels("company_sizes", self.company_sizes.as_deref())?,
            posted_date,
            job_sources: parse_wire_labels("sources", self.sources.as_deref())?,
            industries: split_plain_list(self.industries.as_deref()),
            must_have_skills: split_plain_list(self.skills.as_deref()),
        })
    }
}

fn split_plain_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Feed fetch, normalization and a server-side filter pass, in that order.
/// The feed's own keyword search is approximate; the filter engine enforces
/// the exact criteria on what comes back.
pub async fn list_jobs(
    State(state): State<SharedState>,
    Query(query): Query<JobsQuery>,
) -> Result<Json<Vec<Job>>, ApiError> {
    let filters = query.filter_state()?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let raw = state
        .feed
        .fetch_jobs(query.keyword.as_deref(), query.location.as_deref(), limit)
        .await?;
    let jobs = normalize_jobs(&raw, &state.normalizer);
    let jobs = filter_jobs(&jobs, &filters);

    info!(fetched = raw.len(), returned = jobs.len(), "jobs listed");
    Ok(Json(jobs))
}
