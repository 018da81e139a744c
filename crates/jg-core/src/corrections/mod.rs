pub mod experience;
pub mod job_type;
pub mod work_mode;

pub use experience::infer_experience_level;
pub use job_type::correct_job_type;
pub use work_mode::correct_work_mode;
