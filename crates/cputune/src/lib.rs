//! Load JSON CPU tuning files onto AArch64 tuning parameters.
//!
//! ```no_run
//! use cputune::{TuningLoader, LoadOptions, RenderOptions};
//! use cputune_params::find_profile;
//!
//! let mut params = find_profile("generic").unwrap().params();
//! let report = TuningLoader::new(LoadOptions::default()).load_file("tune.json", &mut params);
//! eprintln!("{}", report.diagnostics.render(&RenderOptions::default()));
//! ```
//!
//! The record is always left usable: a load that stops early leaves it
//! untouched, and a load that reaches binding applies every field it can.
//! Callers decide success by checking [`Diagnostics::has_errors`].

pub mod diagnostics;
pub mod loader;
pub mod options;
pub mod report;

pub use diagnostics::{DiagnosticOptions, Diagnostics};
pub use loader::{
    LoadError, LoadOutcome, LoadReport, TuningLoader, load_tuning_file, report_load_error,
};
pub use options::{LoadOptions, TOOLCHAIN_MAJOR_VERSION};
pub use report::{
    AnnotationKind, DecorStyle, Element, ErrorReport, ErrorReports, Origin, OriginHints,
    RenderOptions, Severity, SourceFile, format_error_report, format_error_reports,
};

pub use cputune_params::{MismatchLevel, TuneParams};
