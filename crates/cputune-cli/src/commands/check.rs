//! Check command - applies a tuning file and reports diagnostics.

use std::process::ExitCode;
use std::time::Instant;

use cputune::LoadOutcome;
use nu_ansi_term::Color;

use crate::args::LoadArgs;
use crate::util::{load, print_diagnostics};

#[derive(clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Quiet mode: print a single summary line instead of the per-file result
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: Args) -> anyhow::Result<ExitCode> {
    let start = Instant::now();
    let (_, report) = load(&args.load)?;
    let duration_s = start.elapsed().as_secs_f64();

    print_diagnostics(&report, &args.load);

    let file = args.load.file.display();
    let errors = report.diagnostics.error_count();
    let warnings = report.diagnostics.warning_count();

    if args.quiet {
        println!(
            "cputune check: {} error(s), {} warning(s) in {:.2}s",
            errors, warnings, duration_s
        );
    } else if errors > 0 {
        println!(
            "{} {} has {} error(s)",
            Color::Red.bold().paint("✗"),
            file,
            errors
        );
    } else if report.outcome == LoadOutcome::Skipped {
        println!(
            "{} {} was not applied",
            Color::Yellow.bold().paint("!"),
            file
        );
    } else {
        println!(
            "{} {} applies cleanly on top of '{}'",
            Color::Green.bold().paint("✓"),
            file,
            args.load.base
        );
    }

    Ok(if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
