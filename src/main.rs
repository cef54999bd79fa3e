//! PiiShield - PII detection and masking for tabular datasets
//!
//! Reads a CSV file of `(record_id, data_json)` rows and writes a redacted
//! copy with an `is_pii` flag per row.

use anyhow::{Context, Result};
use clap::Parser;
use piishield::{config::PiiShieldConfig, pipeline::CsvProcessor, privacy::RedactionEngine};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "piishield")]
#[command(author = "A3S Lab Team")]
#[command(version)]
#[command(about = "Detect and mask PII in JSON records stored in CSV files")]
struct Cli {
    /// Input CSV file with (record_id, data_json) columns
    #[arg(required_unless_present = "print_config")]
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "PIISHIELD_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the summary
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("piishield={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Processing failed. Please check the input file and try again.");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PiiShieldConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => PiiShieldConfig::default(),
    };

    if cli.print_config {
        return show_config(&config);
    }

    let Some(input) = cli.input else {
        anyhow::bail!("No input file given");
    };

    let engine = RedactionEngine::new(&config.privacy)?;
    let output = &config.output.path;
    let summary = CsvProcessor::new(&engine).process_file(&input, output)?;

    println!("Processing complete.");
    println!("Output file generated: {}", output.display());
    println!("{}", summary);

    Ok(())
}

fn show_config(config: &PiiShieldConfig) -> Result<()> {
    let toml = toml::to_string_pretty(config)?;
    println!("{}", toml);
    Ok(())
}
