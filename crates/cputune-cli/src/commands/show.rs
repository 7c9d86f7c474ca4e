//! Show command - prints the parameters after applying a tuning file.

use std::process::ExitCode;

use cputune_params::flags::{describe_flags, extra_tuning, fusion};

use crate::args::LoadArgs;
use crate::util::{load, print_diagnostics};

#[derive(clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub load: LoadArgs,
}

pub fn run(args: Args) -> anyhow::Result<ExitCode> {
    let (params, report) = load(&args.load)?;
    print_diagnostics(&report, &args.load);

    println!("{params:#?}");
    println!();
    println!(
        "fusible_ops: {}",
        describe_flags(params.fusible_ops, fusion::ALL).join(" | ")
    );
    println!(
        "extra_tuning_flags: {}",
        describe_flags(params.extra_tuning_flags, extra_tuning::ALL).join(" | ")
    );

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
