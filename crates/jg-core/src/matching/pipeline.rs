//! Filter-then-rank composition over a normalized job collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ranking::{compute_match_score, match_label};
use crate::filtering::{filter_jobs, filter_jobs_at};
use crate::schema::{FilterState, Job, MatchLevel, ParsedResume};

/// A job annotated with its ranking-policy score and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: Job,
    pub match_score: u8,
    pub match_level: MatchLevel,
}

/// Annotates every job with a ranking score and sorts best first. The sort is
/// stable, so equal scores keep their feed order.
pub fn rank_jobs(jobs: &[Job], resume: Option<&ParsedResume>) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .iter()
        .map(|job| {
            let match_score = compute_match_score(job, resume);
            RankedJob {
                job: job.clone(),
                match_score,
                match_level: match_label(match_score),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

pub fn filter_and_rank(
    jobs: &[Job],
    filters: &FilterState,
    resume: Option<&ParsedResume>,
) -> Vec<RankedJob> {
    rank_jobs(&filter_jobs(jobs, filters), resume)
}

/// Same with an explicit clock for the posted-window criterion.
pub fn filter_and_rank_at(
    jobs: &[Job],
    filters: &FilterState,
    resume: Option<&ParsedResume>,
    now: DateTime<Utc>,
) -> Vec<RankedJob> {
    rank_jobs(&filter_jobs_at(jobs, filters, now), resume)
}
