//! Conjunctive filter evaluation over normalized jobs.
//!
//! Every active criterion must hold for a job to survive; inactive criteria
//! (empty strings, empty lists, unset options) pass everything. The engine
//! never reorders survivors, so feed order is preserved end to end.

use chrono::{DateTime, Duration, Utc};

use crate::schema::{FilterState, Job};
use crate::skills::normalize_skill_token;

/// Filters against the current wall clock.
pub fn filter_jobs(jobs: &[Job], filters: &FilterState) -> Vec<Job> {
    filter_jobs_at(jobs, filters, Utc::now())
}

/// Filters with an explicit clock so posted-window cutoffs stay reproducible.
pub fn filter_jobs_at(jobs: &[Job], filters: &FilterState, now: DateTime<Utc>) -> Vec<Job> {
    jobs.iter()
        .filter(|job| job_passes(job, filters, now))
        .cloned()
        .collect()
}

fn job_passes(job: &Job, filters: &FilterState, now: DateTime<Utc>) -> bool {
    matches_keyword(job, &filters.keyword)
        && matches_location(job, &filters.location)
        && filters
            .quick_location
            .map_or(true, |mode| job.work_mode == mode)
        && passes_membership(&filters.experience_levels, &job.experience_level)
        && passes_membership(&filters.job_types, &job.job_type)
        && passes_membership(&filters.work_modes, &job.work_mode)
        && passes_membership(&filters.company_sizes, &job.company.size)
        && passes_membership(&filters.job_sources, &job.source)
        && passes_membership(&filters.industries, &job.company.industry)
        && above_salary_floor(job, filters.salary_min)
        && below_salary_ceiling(job, filters.salary_max)
        && within_posted_window(job, filters, now)
        && has_required_skills(job, &filters.must_have_skills)
}

/// Case-insensitive substring over title, company name and description.
fn matches_keyword(job: &Job, keyword: &str) -> bool {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let haystack = format!("{} {} {}", job.title, job.company.name, job.description).to_lowercase();
    haystack.contains(&needle)
}

fn matches_location(job: &Job, location: &str) -> bool {
    let needle = location.trim().to_lowercase();
    needle.is_empty() || job.location.to_lowercase().contains(&needle)
}

/// Empty selection means no constraint.
fn passes_membership<T: PartialEq>(selected: &[T], value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// A floor compares against the job's top of range; a job with no published
/// salary counts as zero and is excluded by any floor.
fn above_salary_floor(job: &Job, floor: Option<u64>) -> bool {
    floor.map_or(true, |min| job.salary_max.unwrap_or(0) >= min)
}

/// A ceiling compares against the job's bottom of range; an unpublished
/// bottom counts as zero and always clears the ceiling.
fn below_salary_ceiling(job: &Job, ceiling: Option<u64>) -> bool {
    ceiling.map_or(true, |max| job.salary_min.unwrap_or(0) <= max)
}

fn within_posted_window(job: &Job, filters: &FilterState, now: DateTime<Utc>) -> bool {
    match filters.posted_date.days() {
        None => true,
        // Inclusive cutoff; timestamps ahead of the clock also pass.
        Some(days) => job.posted_at >= now - Duration::days(days),
    }
}

fn has_required_skills(job: &Job, must_have: &[String]) -> bool {
    must_have.iter().all(|skill| {
        let token = normalize_skill_token(skill);
        token.is_empty() || job.skills.iter().any(|have| *have == token)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        Company, CompanySize, Currency, ExperienceLevel, JobSource, JobType, PostedWindow, WorkMode,
    };
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn sample_job(id: &str, title: &str) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            company: Company {
                id: "acme".to_string(),
                name: "Acme".to_string(),
                logo_url: None,
                size: CompanySize::UpTo200,
                industry: "Software".to_string(),
                location: "Berlin, Germany".to_string(),
            },
            location: "Berlin, Germany".to_string(),
            salary_min: Some(50_000),
            salary_max: Some(70_000),
            currency: Currency::Eur,
            experience_level: ExperienceLevel::Years1To3,
            job_type: JobType::FullTime,
            work_mode: WorkMode::Remote,
            source: JobSource::Other,
            skills: vec!["react".to_string(), "aws".to_string()],
            posted_at: fixed_now() - Duration::days(2),
            description: "Build dashboards for our fintech customers.".to_string(),
            responsibilities: Vec::new(),
            required_skills: Vec::new(),
            nice_to_have_skills: Vec::new(),
            apply_url: "https://example.com/apply".to_string(),
        }
    }

    #[test]
    fn default_filters_pass_everything_in_order() {
        let jobs = vec![
            sample_job("a", "Frontend Engineer"),
            sample_job("b", "Backend Engineer"),
            sample_job("c", "Platform Engineer"),
        ];

        let once = filter_jobs_at(&jobs, &FilterState::default(), fixed_now());
        let ids: Vec<&str> = once.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let twice = filter_jobs_at(&once, &FilterState::default(), fixed_now());
        assert_eq!(once, twice);
    }

    #[test]
    fn keyword_scans_title_company_and_description() {
        let jobs = vec![sample_job("a", "Frontend Engineer")];

        let by_description = FilterState {
            keyword: "FINTECH".to_string(),
            ..FilterState::default()
        };
        assert_eq!(filter_jobs_at(&jobs, &by_description, fixed_now()).len(), 1);

        let by_company = FilterState {
            keyword: "acme".to_string(),
            ..FilterState::default()
        };
        assert_eq!(filter_jobs_at(&jobs, &by_company, fixed_now()).len(), 1);

        let no_hit = FilterState {
            keyword: "embedded".to_string(),
            ..FilterState::default()
        };
        assert!(filter_jobs_at(&jobs, &no_hit, fixed_now()).is_empty());
    }

    #[test]
    fn location_matches_substring_case_insensitively() {
        let jobs = vec![sample_job("a", "Frontend Engineer")];
        let filters = FilterState {
            location: "  berlin ".to_string(),
            ..FilterState::default()
        };
        assert_eq!(filter_jobs_at(&jobs, &filters, fixed_now()).len(), 1);
    }

    #[test]
    fn quick_location_compares_work_mode() {
        let mut onsite = sample_job("b", "Office Engineer");
        onsite.work_mode = WorkMode::OnSite;
        let jobs = vec![sample_job("a", "Remote Engineer"), onsite];

        let filters = FilterState {
            quick_location: Some(WorkMode::Remote),
            ..FilterState::default()
        };
        let kept = filter_jobs_at(&jobs, &filters, fixed_now());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "a");
    }

    #[test]
    fn membership_lists_restrict_only_when_non_empty() {
        let mut senior = sample_job("b", "Senior Engineer");
        senior.experience_level = ExperienceLevel::Years5To10;
        senior.job_type = JobType::Contract;
        let jobs = vec![sample_job("a", "Engineer"), senior];

        let filters = FilterState {
            experience_levels: vec![ExperienceLevel::Years5To10],
            job_types: vec![JobType::Contract],
            ..FilterState::default()
        };
        let kept = filter_jobs_at(&jobs, &filters, fixed_now());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "b");
    }

    #[test]
    fn salary_floor_compares_against_job_maximum() {
        let mut low = sample_job("low", "Engineer");
        low.salary_min = Some(30_000);
        low.salary_max = Some(40_000);
        let mut unpriced = sample_job("unpriced", "Engineer");
        unpriced.salary_min = None;
        unpriced.salary_max = None;
        let jobs = vec![sample_job("a", "Engineer"), low, unpriced];

        let filters = FilterState {
            salary_min: Some(50_000),
            ..FilterState::default()
        };
        let kept = filter_jobs_at(&jobs, &filters, fixed_now());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "a");
    }

    #[test]
    fn salary_ceiling_compares_against_job_minimum() {
        let mut pricey = sample_job("pricey", "Engineer");
        pricey.salary_min = Some(120_000);
        pricey.salary_max = Some(150_000);
        let mut unpriced = sample_job("unpriced", "Engineer");
        unpriced.salary_min = None;
        unpriced.salary_max = None;
        let jobs = vec![sample_job("a", "Engineer"), pricey, unpriced];

        let filters = FilterState {
            salary_max: Some(80_000),
            ..FilterState::default()
        };
        let ids: Vec<String> = filter_jobs_at(&jobs, &filters, fixed_now())
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec!["a", "unpriced"]);
    }

    #[test]
    fn posted_window_cutoff_is_inclusive() {
        let mut edge = sample_job("edge", "Engineer");
        edge.posted_at = fixed_now() - Duration::days(7);
        let mut stale = sample_job("stale", "Engineer");
        stale.posted_at = fixed_now() - Duration::days(8);
        let mut future = sample_job("future", "Engineer");
        future.posted_at = fixed_now() + Duration::hours(2);
        let jobs = vec![edge, stale, future];

        let filters = FilterState {
            posted_date: PostedWindow::Last7Days,
            ..FilterState::default()
        };
        let ids: Vec<String> = filter_jobs_at(&jobs, &filters, fixed_now())
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec!["edge", "future"]);
    }

    #[test]
    fn must_have_skills_require_every_token() {
        let jobs = vec![sample_job("a", "Engineer")];

        let subset = FilterState {
            must_have_skills: vec!["React".to_string()],
            ..FilterState::default()
        };
        assert_eq!(filter_jobs_at(&jobs, &subset, fixed_now()).len(), 1);

        let superset = FilterState {
            must_have_skills: vec!["react".to_string(), "docker".to_string()],
            ..FilterState::default()
        };
        assert!(filter_jobs_at(&jobs, &superset, fixed_now()).is_empty());
    }

    #[test]
    fn source_size_and_industry_memberships() {
        let mut fintech = sample_job("b", "Engineer");
        fintech.company.industry = "Fintech".to_string();
        fintech.company.size = CompanySize::Over1000;
        fintech.source = JobSource::LinkedIn;
        let jobs = vec![sample_job("a", "Engineer"), fintech];

        let filters = FilterState {
            job_sources: vec![JobSource::LinkedIn],
            company_sizes: vec![CompanySize::Over1000],
            industries: vec!["Fintech".to_string()],
            ..FilterState::default()
        };
        let kept = filter_jobs_at(&jobs, &filters, fixed_now());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "b");
    }
}
