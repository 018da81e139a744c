//! Advisor scoring policy.
//!
//! Builds the matched/missing/extra skill partition between a job and a
//! résumé, then derives a coverage-based score. Thresholds here (Medium at 55)
//! belong to this policy alone; see `ranking` for the list-view policy.

use serde::{Deserialize, Serialize};

use crate::schema::{Job, MatchLevel, ParsedResume};
use crate::skills::{extract_skills, normalize_skill_token, SkillVocabulary};

/// Skill-gap report for one job/résumé pair. Skill lists keep the order in
/// which tokens were first seen, so callers can render them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u8,
    pub level: MatchLevel,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
}

/// Scores a résumé against a job. Returns `None` when there is no résumé or
/// when the job's combined skill set is empty, since coverage would be
/// meaningless in either case.
pub fn compute_match(
    job: &Job,
    resume: Option<&ParsedResume>,
    vocabulary: &SkillVocabulary,
) -> Option<MatchResult> {
    let resume = resume?;

    let job_set = job_skill_set(job, vocabulary);
    if job_set.is_empty() {
        return None;
    }
    let resume_set = resume_skill_set(resume, vocabulary);

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in &job_set {
        if resume_set.contains(skill) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }
    let extra: Vec<String> = resume_set
        .into_iter()
        .filter(|skill| !job_set.contains(skill))
        .collect();

    let coverage = matched.len() as f64 / job_set.len() as f64;
    let score = (60.0 + coverage * 35.0 - missing.len() as f64 * 3.0)
        .round()
        .clamp(5.0, 98.0) as u8;
    let level = if score >= 75 {
        MatchLevel::High
    } else if score >= 55 {
        MatchLevel::Medium
    } else {
        MatchLevel::Low
    };

    Some(MatchResult {
        score,
        level,
        matched_skills: matched,
        missing_skills: missing,
        extra_skills: extra,
    })
}

/// Explicit skill lists plus whatever the description scan finds,
/// first-seen order, no duplicates.
fn job_skill_set(job: &Job, vocabulary: &SkillVocabulary) -> Vec<String> {
    let mut set = Vec::new();
    for listed in job
        .skills
        .iter()
        .chain(&job.required_skills)
        .chain(&job.nice_to_have_skills)
    {
        push_unique(&mut set, normalize_skill_token(listed));
    }
    for found in extract_skills(&job.description, vocabulary) {
        push_unique(&mut set, found);
    }
    set
}

fn resume_skill_set(resume: &ParsedResume, vocabulary: &SkillVocabulary) -> Vec<String> {
    let mut set = Vec::new();
    for listed in &resume.skills {
        push_unique(&mut set, normalize_skill_token(listed));
    }
    if let Some(text) = &resume.raw_text {
        for found in extract_skills(text, vocabulary) {
            push_unique(&mut set, found);
        }
    }
    set
}

fn push_unique(set: &mut Vec<String>, token: String) {
    if !token.is_empty() && !set.contains(&token) {
        set.push(token);
    }
}
