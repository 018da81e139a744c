//! Recent-search bookkeeping.
//!
//! Pure list surgery over owned summaries; callers own persistence (or the
//! lack of it).

use crate::schema::SearchQuerySummary;

pub const DEFAULT_HISTORY_CAP: usize = 5;

/// Prepends the newest search, drops any older entry for the same keyword and
/// location pair, and truncates to `cap`.
pub fn record_search(
    history: &mut Vec<SearchQuerySummary>,
    summary: SearchQuerySummary,
    cap: usize,
) {
    history.retain(|entry| {
        entry.keyword != summary.keyword || entry.location != summary.location
    });
    history.insert(0, summary);
    history.truncate(cap);
}
