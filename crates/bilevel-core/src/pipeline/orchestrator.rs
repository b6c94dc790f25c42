use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::execution::ExecutionContext;
use crate::io::image_io::{load_rgba, save_rgba};

use super::config::PipelineConfig;
use super::helpers::{apply_filter_step, build_filter};
use super::types::{NoOpReporter, PipelineStage, ProgressReporter};

pub fn run_pipeline(config: &PipelineConfig) -> Result<()> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}

/// Load the input, run every filter in order, and save the result.
///
/// All steps are validated before the input is read.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<()> {
    for step in &config.filters {
        build_filter(step)?;
    }
    let exec = ExecutionContext::from_config(&config.execution)?;

    reporter.begin_stage(PipelineStage::Reading, None);
    let mut image = load_rgba(&config.input)?;
    info!(
        input = %config.input.display(),
        width = image.width(),
        height = image.height(),
        "Image loaded"
    );
    reporter.finish_stage();

    let total = config.filters.len();
    reporter.begin_stage(PipelineStage::Filtering, Some(total));
    for (i, step) in config.filters.iter().enumerate() {
        apply_filter_step(&mut image, step, &exec)?;
        info!(step = %step, "Filter applied");
        reporter.advance(i + 1);
    }
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Writing, None);
    save_rgba(&image, &config.output)?;
    info!(output = %config.output.display(), "Output saved");
    reporter.finish_stage();

    Ok(())
}
