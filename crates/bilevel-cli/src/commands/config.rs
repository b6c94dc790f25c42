use std::path::PathBuf;

use anyhow::{Context, Result};
use bilevel_core::execution::ExecutionConfig;
use bilevel_core::filters::grayscale::GrayscaleMode;
use bilevel_core::pipeline::config::{FilterStep, PipelineConfig};
use clap::Args;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save an example PipelineConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = PipelineConfig {
        input: PathBuf::from("input.png"),
        output: PathBuf::from("binary.png"),
        execution: ExecutionConfig::default(),
        filters: vec![
            FilterStep::Grayscale {
                mode: GrayscaleMode::Bt709,
                amount: 1.0,
                region: None,
            },
            FilterStep::binary_threshold(0.5),
        ],
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Example config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
