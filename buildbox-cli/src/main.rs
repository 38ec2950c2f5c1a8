mod cli;
mod commands;

use std::process::ExitCode;

use buildbox_shared::BuildboxError;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        // No subcommand is a request for orientation, not an error
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let result = match command {
        Commands::Help => commands::help::execute(),
        Commands::Show => commands::show::execute(&cli.global),
        Commands::Prolong(args) => commands::prolong::execute(args, &cli.global),
        Commands::Release => commands::release::execute(&cli.global),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code(&err)
        }
    }
}

/// Policy rejections exit 1; broken deployments exit 2.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<BuildboxError>() {
        Some(e) if e.is_policy() => ExitCode::from(1),
        _ => ExitCode::from(2),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
