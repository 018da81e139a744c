use crate::schema::JobType;

/// Employment-type ENUM: Full-time / Part-time / Contract / Internship / Freelance.
///
/// Feeds send free text ("full_time", "Contract basis", "internship").
/// Substring scan, first match wins; anything unrecognized is Full-time.
pub fn correct_job_type(input: &str) -> JobType {
    let lower = input.trim().to_lowercase();
    if lower.is_empty() {
        return JobType::FullTime; // Default
    }

    if lower.contains("part") {
        return JobType::PartTime;
    }
    if lower.contains("contract") {
        return JobType::Contract;
    }
    if lower.contains("intern") {
        return JobType::Internship;
    }
    if lower.contains("freelance") || lower.contains("consult") {
        return JobType::Freelance;
    }

    JobType::FullTime // Default
}
