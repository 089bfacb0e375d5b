//! confgen CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Config rendered and written
//! - 1: Any failure (load, validation in strict mode, render, write)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use confgen_core::{FailureKind, Pipeline, PipelineError, PipelineOptions, TracingSink};

/// Render a device configuration from a YAML data file and a text template.
#[derive(Parser)]
#[command(name = "confgen", version, about)]
struct Cli {
    /// Path to the YAML data file
    #[arg(short, long, default_value = "switch_data.yaml")]
    data: PathBuf,

    /// Path to the template file
    #[arg(short, long, default_value = "cisco_template.j2")]
    template: PathBuf,

    /// Path to the output file
    #[arg(short, long, default_value = "final_config.txt")]
    output: PathBuf,

    /// Fail on validation warnings (be strict about required fields)
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env().add_directive("info".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let kind = e
                .downcast_ref::<PipelineError>()
                .map(PipelineError::kind)
                .unwrap_or(FailureKind::Unexpected);
            eprintln!("Error ({kind}): {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = PipelineOptions::new(cli.data, cli.template, cli.output).strict(cli.strict);
    Pipeline::new(options).run(&TracingSink)?;
    Ok(())
}
