//! Resume-to-job compatibility scoring.
//!
//! Two scoring policies coexist on purpose. The advisor policy (`advisor`)
//! produces the full skill-gap report shown on a job detail page; the ranking
//! policy (`ranking`) produces the cheap badge score used to order the list
//! view. They share the Low/Medium/High labels but nothing else: formulas and
//! thresholds differ, and unifying them would silently change one surface or
//! the other. Keep them separate until product picks a winner.

pub mod advice;
pub mod advisor;
pub mod pipeline;
pub mod ranking;

pub use advice::{build_advice, MatchAdvice};
pub use advisor::{compute_match, MatchResult};
pub use pipeline::{filter_and_rank, filter_and_rank_at, rank_jobs, RankedJob};
pub use ranking::{compute_match_score, match_label};
