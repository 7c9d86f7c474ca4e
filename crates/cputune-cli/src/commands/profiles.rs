//! Profiles command - lists the base profiles.

use std::process::ExitCode;

use cputune_params::{DEFAULT_PROFILE, PROFILES};
use nu_ansi_term::Color;

pub fn run() -> anyhow::Result<ExitCode> {
    for profile in PROFILES {
        let marker = if profile.name == DEFAULT_PROFILE {
            " (default)"
        } else {
            ""
        };
        println!(
            "{}{}\n    {}",
            Color::Cyan.paint(profile.name),
            marker,
            profile.description
        );
    }
    Ok(ExitCode::SUCCESS)
}
