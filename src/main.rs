//! nugoget - update the NuGet dependencies of .NET projects
//!
//! Reads `dotnet list package --outdated`, applies `--lock` pins and runs
//! `dotnet add package` for every package that has a newer version.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use nugoget::cli::{Cli, Commands, UpdateArgs};
use nugoget::domain::RunSummary;
use nugoget::error::{AppError, EXIT_FAILURE};
use nugoget::lock::LockTable;
use nugoget::orchestrator::{Orchestrator, RunOptions};
use nugoget::output::{ConsoleReporter, JsonFormatter};
use nugoget::package_manager::DotnetCli;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match &cli.command {
        Commands::Update(args) => run_update(args),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            let code = e
                .downcast_ref::<AppError>()
                .map(AppError::exit_code)
                .unwrap_or(EXIT_FAILURE);
            ExitCode::from(code)
        }
    }
}

fn init_tracing(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nugoget={level}")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Run the `update` subcommand
fn run_update(args: &UpdateArgs) -> anyhow::Result<RunSummary> {
    // Locks are validated before anything touches dotnet
    let locks = LockTable::from_specs(&args.locks).map_err(AppError::from)?;
    let package_manager = DotnetCli::locate(&args.path).map_err(AppError::from)?;

    let orchestrator = Orchestrator::new(RunOptions::from_args(args), locks);

    let result = if args.json {
        let stderr = io::stderr();
        let color = stderr.is_terminal();
        let mut reporter = ConsoleReporter::with_color(stderr, color);
        orchestrator.run(&package_manager, &mut reporter)
    } else {
        let mut reporter = ConsoleReporter::new(io::stdout());
        orchestrator.run(&package_manager, &mut reporter)
    };
    let summary = result.map_err(AppError::from)?;

    if args.json {
        let mut stdout = io::stdout().lock();
        JsonFormatter::new()
            .format(&summary, &mut stdout)
            .context("failed to write JSON summary")?;
        stdout.flush()?;
    }

    Ok(summary)
}
