//! Shared argument definitions.

use std::io::IsTerminal;
use std::path::PathBuf;

use cputune::{
    DecorStyle, DiagnosticOptions, LoadOptions, MismatchLevel, RenderOptions,
    TOOLCHAIN_MAJOR_VERSION,
};
use cputune_params::DEFAULT_PROFILE;

/// Arguments for commands that load a tuning file.
///
/// Embedded in command Args using `#[command(flatten)]`.
#[derive(clap::Args, Clone)]
pub struct LoadArgs {
    /// Path to the JSON tuning file
    pub file: PathBuf,

    /// Base profile the tuning file is applied on top of
    #[arg(short, long, default_value = DEFAULT_PROFILE)]
    pub base: String,

    /// Toolchain major version that `metadata.gcc_version` must match
    #[arg(long, value_name = "N", default_value_t = TOOLCHAIN_MAJOR_VERSION)]
    pub toolchain_version: u32,

    /// Report wrongly typed values found while binding as errors
    #[arg(long)]
    pub strict: bool,

    /// Suppress warnings
    #[arg(short = 'w', long)]
    pub no_warnings: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub werror: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl LoadArgs {
    pub fn to_load_options(&self) -> LoadOptions {
        let level = if self.strict {
            MismatchLevel::Error
        } else {
            MismatchLevel::Warning
        };
        LoadOptions::default()
            .with_toolchain_major(self.toolchain_version)
            .with_mismatch_level(level)
            .with_diagnostics(DiagnosticOptions {
                suppress_warnings: self.no_warnings,
                warnings_as_errors: self.werror,
            })
    }
}

/// Diagnostic rendering arguments.
#[derive(clap::Args, Clone, Default)]
pub struct RenderArgs {
    /// Draw diagnostics with ASCII characters only
    #[arg(long)]
    pub ascii: bool,

    /// Disable colors
    #[arg(long)]
    pub plain: bool,
}

impl RenderArgs {
    pub fn to_render_options(&self) -> RenderOptions {
        RenderOptions {
            styled: !self.plain && std::io::stderr().is_terminal(),
            decor: if self.ascii {
                DecorStyle::Ascii
            } else {
                DecorStyle::Unicode
            },
        }
    }
}
