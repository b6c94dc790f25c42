use std::path::PathBuf;

use anyhow::{Context, Result};
use bilevel_core::consts::DEFAULT_THRESHOLD;
use bilevel_core::execution::ExecutionContext;
use bilevel_core::io::image_io::{load_rgba, save_rgba};
use bilevel_core::pipeline::apply_filter_step;
use bilevel_core::pipeline::config::FilterStep;
use clap::Args;

use super::args::{parse_color, parse_rect, ExecutionArgs};

#[derive(Args)]
pub struct ThresholdArgs {
    /// Input image file
    pub file: PathBuf,

    /// Luminance threshold in [0.0, 1.0]; pixels at or above it get the upper color
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f32,

    /// Region to process: "x,y,width,height" (default: whole image)
    #[arg(long, allow_hyphen_values = true)]
    pub rect: Option<String>,

    /// Upper color as RRGGBB[AA] (default: white)
    #[arg(long, default_value = "ffffffff")]
    pub upper: String,

    /// Lower color as RRGGBB[AA] (default: black)
    #[arg(long, default_value = "000000ff")]
    pub lower: String,

    #[command(flatten)]
    pub execution: ExecutionArgs,

    /// Output file path
    #[arg(short, long, default_value = "binary.png")]
    pub output: PathBuf,
}

pub fn run(args: &ThresholdArgs) -> Result<()> {
    let step = FilterStep::BinaryThreshold {
        threshold: args.threshold,
        upper: parse_color(&args.upper)?,
        lower: parse_color(&args.lower)?,
        region: args.rect.as_deref().map(parse_rect).transpose()?,
    };
    let exec = ExecutionContext::from_config(&args.execution.to_config())?;

    let mut image = load_rgba(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", image.width(), image.height());

    println!("Applying binary threshold: {}", args.threshold);
    apply_filter_step(&mut image, &step, &exec)?;

    save_rgba(&image, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
