use crate::schema::WorkMode;

/// Work-mode ENUM correction. Most feeds carry no explicit mode, so missing
/// or unrecognized input falls back to the feed's configured default (Remote
/// for remote-only boards). "hybrid" is checked first so mixed phrases like
/// "hybrid remote" stay Hybrid.
pub fn correct_work_mode(input: &str, default: WorkMode) -> WorkMode {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }

    let lower = trimmed.to_lowercase();
    if lower.contains("hybrid") {
        return WorkMode::Hybrid;
    }
    if lower.contains("on-site") || lower.contains("onsite") || lower.contains("on site") {
        return WorkMode::OnSite;
    }
    if lower.contains("office") {
        return WorkMode::OnSite;
    }
    if lower.contains("remote") {
        return WorkMode::Remote;
    }

    default
}
