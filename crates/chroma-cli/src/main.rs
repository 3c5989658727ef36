//! chroma - colour science command line tool
//!
//! LUT inspection, conversion and generation plus a handful of
//! closed-form colorimetry printouts.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Colour science command line tool")]
#[command(long_about = "
LUT and colour-science utilities.

Examples:
  chroma info look.cube                     # Show LUT info
  chroma convert in.cube out.cube -d 5      # Rewrite with 5 decimals
  chroma identity unity.cube --size 33 --cube
  chroma apply look.cube 0.5 0.3 0.2        # Evaluate one RGB triple
  chroma blackbody 6500                     # Spectral radiance table
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display LUT information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Rewrite a LUT file
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Generate an identity LUT
    Identity(IdentityArgs),

    /// Apply a LUT to a single RGB triple
    Apply(ApplyArgs),

    /// Print a blackbody spectral distribution
    Blackbody(BlackbodyArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// LUT file (.cube)
    lut: PathBuf,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input LUT file (.cube)
    input: PathBuf,

    /// Output LUT file (.cube)
    output: PathBuf,

    /// Fractional digits per value
    #[arg(short, long, default_value_t = 7)]
    decimals: usize,

    /// Replace the LUT title
    #[arg(short, long)]
    title: Option<String>,
}

#[derive(Args)]
struct IdentityArgs {
    /// Output LUT file (.cube)
    output: PathBuf,

    /// Samples per dimension
    #[arg(short, long, default_value_t = 33)]
    size: usize,

    /// Generate a 3D cube instead of per-channel curves
    #[arg(long)]
    cube: bool,
}

#[derive(Args)]
struct ApplyArgs {
    /// LUT file (.cube)
    lut: PathBuf,

    /// Red input
    r: f32,

    /// Green input
    g: f32,

    /// Blue input
    b: f32,
}

#[derive(Args)]
struct BlackbodyArgs {
    /// Radiator temperature in kelvin
    temperature: f64,

    /// First sampled wavelength, nm
    #[arg(long, default_value_t = 360.0)]
    start: f64,

    /// Last sampled wavelength, nm
    #[arg(long, default_value_t = 780.0)]
    end: f64,

    /// Sampling interval, nm
    #[arg(long, default_value_t = 5.0)]
    interval: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Identity(args) => commands::identity::run(args, cli.verbose),
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Blackbody(args) => commands::blackbody::run(args),
    }
}
