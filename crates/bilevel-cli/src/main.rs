mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bilevel", about = "Region-based binary thresholding for images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image region to two colors around a luminance threshold
    Threshold(commands::threshold::ThresholdArgs),
    /// Convert an image region to grayscale
    Grayscale(commands::grayscale::GrayscaleArgs),
    /// Run a filter pipeline from a TOML config
    Run(commands::pipeline::RunArgs),
    /// Print an example pipeline config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Threshold(args) => commands::threshold::run(args),
        Commands::Grayscale(args) => commands::grayscale::run(args),
        Commands::Run(args) => commands::pipeline::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
