use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nu_ansi_term::Color;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod util;

#[derive(Parser)]
#[command(name = "cputune", version, about = "Check and inspect JSON CPU tuning files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a tuning file to a base profile and report diagnostics
    Check(commands::check::Args),
    /// Apply a tuning file and print the resulting parameters
    Show(commands::show::Args),
    /// Print the built-in tuning schema
    Schema(commands::schema::Args),
    /// List the base profiles
    Profiles,
}

/// Log filter from `CPUTUNE_LOG`, defaulting to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("CPUTUNE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Schema(args) => commands::schema::run(args),
        Commands::Profiles => commands::profiles::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", Color::Red.paint(format!("Error: {e:#}")));
            ExitCode::FAILURE
        }
    }
}
