pub mod config;
mod helpers;
mod orchestrator;
mod types;

pub use helpers::{apply_filter_step, build_filter};
pub use orchestrator::{run_pipeline, run_pipeline_reported};
pub use types::{PipelineStage, ProgressReporter};
