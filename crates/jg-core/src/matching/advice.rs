//! Guidance text rendered next to an advisor score.
//!
//! Pure templating over the scorer's output. The scorer stays free of copy
//! so a reworded suggestion never touches scoring tests.

use serde::{Deserialize, Serialize};

use super::advisor::MatchResult;
use crate::schema::Job;
use crate::skills::display_skill;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAdvice {
    pub suggestions: Vec<String>,
    pub tailored_summary: String,
}

pub fn build_advice(job: &Job, result: &MatchResult) -> MatchAdvice {
    let lead = if result.missing_skills.is_empty() {
        "Your skills align well with this role.".to_string()
    } else {
        let highlights: Vec<String> = result
            .missing_skills
            .iter()
            .map(|skill| display_skill(skill))
            .collect();
        format!("Add or highlight: {}", highlights.join(", "))
    };

    MatchAdvice {
        suggestions: vec![
            lead,
            "Mirror the job title in your resume headline.".to_string(),
            "Surface key technologies in your top experience bullets.".to_string(),
        ],
        tailored_summary: format!(
            "Frontend engineer applying for the {} role at {}, with hands-on experience \
             building modern, accessible, high-performance interfaces using React, \
             TypeScript, and APIs.",
            job.title, job.company.name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        Company, CompanySize, Currency, ExperienceLevel, JobSource, JobType, MatchLevel, WorkMode,
    };
    use chrono::Utc;

    fn sample_job() -> Job {
        Job {
            id: "j1".to_string(),
            title: "Senior React Developer".to_string(),
            company: Company {
                id: "acme".to_string(),
                name: "Acme Web".to_string(),
                logo_url: None,
                size: CompanySize::UpTo50,
                industry: "Software".to_string(),
                location: "Remote".to_string(),
            },
            location: "Remote".to_string(),
            salary_min: None,
            salary_max: None,
            currency: Currency::Usd,
            experience_level: ExperienceLevel::Years5To10,
            job_type: JobType::FullTime,
            work_mode: WorkMode::Remote,
            source: JobSource::Other,
            skills: vec!["react".to_string()],
            posted_at: Utc::now(),
            description: String::new(),
            responsibilities: Vec::new(),
            required_skills: Vec::new(),
            nice_to_have_skills: Vec::new(),
            apply_url: "https://example.com".to_string(),
        }
    }

    fn result_missing(missing: &[&str]) -> MatchResult {
        MatchResult {
            score: 60,
            level: MatchLevel::Medium,
            matched_skills: vec!["react".to_string()],
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            extra_skills: Vec::new(),
        }
    }

    #[test]
    fn missing_skills_drive_the_lead_suggestion() {
        let advice = build_advice(&sample_job(), &result_missing(&["node", "graphql"]));
        assert_eq!(advice.suggestions.len(), 3);
        assert_eq!(advice.suggestions[0], "Add or highlight: Node.js, Graphql");
    }

    #[test]
    fn clean_match_gets_the_alignment_line() {
        let advice = build_advice(&sample_job(), &result_missing(&[]));
        assert_eq!(advice.suggestions[0], "Your skills align well with this role.");
    }

    #[test]
    fn summary_names_the_role_and_company() {
        let advice = build_advice(&sample_job(), &result_missing(&[]));
        assert!(advice
            .tailored_summary
            .starts_with("Frontend engineer applying for the Senior React Developer role at Acme Web,"));
    }
}
