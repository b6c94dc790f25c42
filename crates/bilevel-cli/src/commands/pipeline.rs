use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bilevel_core::pipeline::config::PipelineConfig;
use bilevel_core::pipeline::{run_pipeline_reported, PipelineStage, ProgressReporter};
use clap::Args;
use tracing::debug;

#[derive(Args)]
pub struct RunArgs {
    /// Pipeline config file (TOML)
    pub config: PathBuf,
}

/// Prints one line per stage and per applied filter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        match total_items {
            Some(n) => println!("{stage} ({n})"),
            None => println!("{stage}"),
        }
    }

    fn advance(&self, items_done: usize) {
        println!("  filter {items_done} done");
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let config: PipelineConfig = toml::from_str(&contents).context("Invalid pipeline config")?;
    debug!(
        config = %args.config.display(),
        steps = config.filters.len(),
        "Pipeline config loaded"
    );

    run_pipeline_reported(&config, Arc::new(ConsoleReporter))?;
    println!("Saved to {}", config.output.display());

    Ok(())
}
