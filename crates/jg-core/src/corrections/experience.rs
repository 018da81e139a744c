use crate::schema::ExperienceLevel;

/// Title-keyword heuristic for a posting's experience bucket, first match
/// wins. "sr" is deliberately loose so "Sr. Engineer" variants land in the
/// senior bucket. Titles with no seniority marker get the mid-level default.
pub fn infer_experience_level(title: &str) -> ExperienceLevel {
    let lower = title.to_lowercase();

    if lower.contains("intern") {
        return ExperienceLevel::InternFresher;
    }
    if lower.contains("junior") || lower.contains("entry") {
        return ExperienceLevel::Years0To1;
    }
    if lower.contains("senior") || lower.contains("sr") || lower.contains("lead") {
        return ExperienceLevel::Years5To10;
    }
    if lower.contains("principal") || lower.contains("director") || lower.contains("head") {
        return ExperienceLevel::Years10Plus;
    }

    ExperienceLevel::Years1To3 // Default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_seniority_keywords() {
        assert_eq!(
            infer_experience_level("Engineering Intern"),
            ExperienceLevel::InternFresher
        );
        assert_eq!(
            infer_experience_level("Junior Backend Developer"),
            ExperienceLevel::Years0To1
        );
        assert_eq!(
            infer_experience_level("Entry Level QA"),
            ExperienceLevel::Years0To1
        );
        assert_eq!(
            infer_experience_level("Senior React Developer"),
            ExperienceLevel::Years5To10
        );
        assert_eq!(
            infer_experience_level("Sr. Platform Engineer"),
            ExperienceLevel::Years5To10
        );
        assert_eq!(
            infer_experience_level("Tech Lead"),
            ExperienceLevel::Years5To10
        );
        assert_eq!(
            infer_experience_level("Principal Architect"),
            ExperienceLevel::Years10Plus
        );
        assert_eq!(
            infer_experience_level("Head of Engineering"),
            ExperienceLevel::Years10Plus
        );
    }

    #[test]
    fn intern_outranks_other_markers() {
        assert_eq!(
            infer_experience_level("Senior Intern Program"),
            ExperienceLevel::InternFresher
        );
    }

    #[test]
    fn plain_titles_default_to_mid_level() {
        assert_eq!(
            infer_experience_level("React Developer"),
            ExperienceLevel::Years1To3
        );
        assert_eq!(infer_experience_level(""), ExperienceLevel::Years1To3);
    }
}
