//! Ranking scoring policy.
//!
//! The cheap overlap score used to order job lists. Works only from the job's
//! explicit skill list (no description scan) and pays a flat bonus when the
//! candidate's years of experience sit inside the job's bucket. Thresholds
//! here (Medium at 40) belong to this policy alone; see `advisor`.

use crate::schema::{Job, MatchLevel, ParsedResume};
use crate::skills::{normalize_skill_list, normalize_skill_token};

const EXPERIENCE_BONUS: f64 = 10.0;

/// Overlap score in 0..=100. No résumé, or no skill overlap at all, scores
/// zero; the experience bonus never rescues a zero-overlap pair.
pub fn compute_match_score(job: &Job, resume: Option<&ParsedResume>) -> u8 {
    let Some(resume) = resume else {
        return 0;
    };

    let job_skills: Vec<String> = job.skills.iter().map(|s| normalize_skill_token(s)).collect();
    let resume_skills = normalize_skill_list(&resume.skills);

    let overlap = resume_skills
        .iter()
        .filter(|skill| job_skills.contains(skill))
        .count();
    if overlap == 0 {
        return 0;
    }

    let base = overlap as f64 / job_skills.len().max(1) as f64 * 100.0;

    let bonus = match resume.total_experience_years {
        Some(years) if job.experience_level.contains_years(years) => EXPERIENCE_BONUS,
        _ => 0.0,
    };

    (base + bonus).round().min(100.0) as u8
}

/// Label thresholds for the ranking policy.
pub fn match_label(score: u8) -> MatchLevel {
    if score >= 75 {
        MatchLevel::High
    } else if score >= 40 {
        MatchLevel::Medium
    } else {
        MatchLevel::Low
    }
}
