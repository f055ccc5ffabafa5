//! modcop - Go module version policy checker CLI tool
//!
//! Reads a rule file and a go.mod file (local or over http/s) and reports
//! every required module whose version the rules deprecate.

use clap::{CommandFactory, Parser};
use modcop::cli::CliArgs;
use modcop::orchestrator::Orchestrator;
use modcop::output::{create_formatter, OutputConfig};
use modcop::source::Fetcher;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout is reserved for the report
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Usage display is not an error
    let Some(options) = args.check_options() else {
        CliArgs::command().print_help()?;
        println!();
        return Ok(ExitCode::SUCCESS);
    };

    let fetcher = Fetcher::new(&args.source_config())?;
    let report = Orchestrator::new(fetcher, options).run().await?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet)
        .with_color(io::stdout().is_terminal());
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    if report.has_deprecated() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
