use std::path::PathBuf;

use anyhow::{Context, Result};
use bilevel_core::execution::ExecutionContext;
use bilevel_core::filters::grayscale::GrayscaleMode;
use bilevel_core::io::image_io::{load_rgba, save_rgba};
use bilevel_core::pipeline::apply_filter_step;
use bilevel_core::pipeline::config::FilterStep;
use clap::{Args, ValueEnum};

use super::args::{parse_rect, ExecutionArgs};

#[derive(Clone, Copy, ValueEnum)]
pub enum GrayscaleModeArg {
    Bt709,
    Bt601,
}

impl From<GrayscaleModeArg> for GrayscaleMode {
    fn from(arg: GrayscaleModeArg) -> Self {
        match arg {
            GrayscaleModeArg::Bt709 => GrayscaleMode::Bt709,
            GrayscaleModeArg::Bt601 => GrayscaleMode::Bt601,
        }
    }
}

#[derive(Args)]
pub struct GrayscaleArgs {
    /// Input image file
    pub file: PathBuf,

    /// Luminance weighting
    #[arg(long, value_enum, default_value = "bt709")]
    pub mode: GrayscaleModeArg,

    /// Blend amount in [0.0, 1.0] (1.0 = fully gray)
    #[arg(long, default_value_t = 1.0)]
    pub amount: f32,

    /// Region to process: "x,y,width,height" (default: whole image)
    #[arg(long, allow_hyphen_values = true)]
    pub rect: Option<String>,

    #[command(flatten)]
    pub execution: ExecutionArgs,

    /// Output file path
    #[arg(short, long, default_value = "gray.png")]
    pub output: PathBuf,
}

pub fn run(args: &GrayscaleArgs) -> Result<()> {
    let step = FilterStep::Grayscale {
        mode: args.mode.into(),
        amount: args.amount,
        region: args.rect.as_deref().map(parse_rect).transpose()?,
    };
    let exec = ExecutionContext::from_config(&args.execution.to_config())?;

    let mut image = load_rgba(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", image.width(), image.height());

    println!("Applying {step}");
    apply_filter_step(&mut image, &step, &exec)?;

    save_rgba(&image, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
