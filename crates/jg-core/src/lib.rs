pub mod corrections;
pub mod filtering;
pub mod history;
pub mod ids;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod resume;
pub mod schema;
pub mod skills;
pub mod sources;

// Commonly used records, re-exported for call sites that pair jobs with
// résumés everywhere.
pub use schema::{
    Company, CompanySize, Currency, ExperienceLevel, FilterState, Job, JobSource, JobType,
    MatchLevel, ParsedResume, PostedWindow, SearchQuerySummary, WorkMode,
};
