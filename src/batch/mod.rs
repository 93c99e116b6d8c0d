mod job;
mod orchestrator;

pub use job::BatchSummary;
pub use orchestrator::convert_all;
