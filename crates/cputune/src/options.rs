//! Load configuration.

use cputune_json::ParseOptions;
use cputune_params::MismatchLevel;

use crate::diagnostics::DiagnosticOptions;

/// Major version of the toolchain the tuning record belongs to.
///
/// A tuning file's `metadata.gcc_version` must equal this.
pub const TOOLCHAIN_MAJOR_VERSION: u32 = 16;

/// Options for [`TuningLoader`](crate::TuningLoader).
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Version that `metadata.gcc_version` is checked against.
    pub toolchain_major: u32,
    /// Level for kind mismatches found while binding.
    pub mismatch_level: MismatchLevel,
    pub diagnostics: DiagnosticOptions,
    pub parse: ParseOptions,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            toolchain_major: TOOLCHAIN_MAJOR_VERSION,
            mismatch_level: MismatchLevel::Warning,
            diagnostics: DiagnosticOptions::default(),
            parse: ParseOptions::tuning_file(),
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_toolchain_major(mut self, major: u32) -> Self {
        self.toolchain_major = major;
        self
    }

    #[must_use]
    pub fn with_mismatch_level(mut self, level: MismatchLevel) -> Self {
        self.mismatch_level = level;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticOptions) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}
