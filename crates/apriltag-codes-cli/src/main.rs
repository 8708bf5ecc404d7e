//! Command-line front end for the reference-code conversion.
//!
//! Running with no arguments reproduces the reference pipeline: all eight
//! families, `docs/reference-detection/<family>.c` in,
//! `families/<family>.bin` out.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use apriltag_codes::{convert_families, ConvertError, Family};

#[derive(Parser, Debug)]
#[command(
    name = "apriltag-codes",
    about = "Extract AprilTag code arrays from reference C files into flat little-endian .bin files",
    version
)]
struct Cli {
    /// Directory holding the reference <family>.c documents.
    #[arg(long, default_value = "docs/reference-detection")]
    ref_dir: PathBuf,

    /// Directory to write the <family>.bin artifacts into (created if absent).
    #[arg(long, default_value = "families")]
    out_dir: PathBuf,

    /// Print the run summary as JSON instead of one line per family.
    #[arg(long)]
    json: bool,

    /// Families to convert (default: all eight, in canonical order).
    #[arg(value_name = "FAMILY")]
    families: Vec<Family>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let families: Vec<Family> = if cli.families.is_empty() {
        Family::ALL.to_vec()
    } else {
        // Subset runs keep the canonical processing order regardless of the
        // order given on the command line.
        Family::ALL
            .into_iter()
            .filter(|f| cli.families.contains(f))
            .collect()
    };

    let reports = convert_families(&families, &cli.ref_dir, &cli.out_dir)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!(
                "{}: {} codes -> {} ({} bytes)",
                report.family,
                report.codes,
                report.artifact.display(),
                report.bytes
            );
        }
    }
    Ok(())
}
