//! Applying a tuning file to a [`TuneParams`] record.
//!
//! A load runs a fixed sequence of stages: read, parse, root check, version
//! check, `tune_params` lookup, schema validation, binding, and the dispatch
//! fixup. Any stage before binding can stop the load, in which case the
//! record is left untouched. Once binding starts every field present in the
//! file gets its chance; kind mismatches only leave that one field at zero.

use std::path::Path;

use cputune_json::{InputSpan, JsonDiagnostics, JsonParseError, JsonPointer, Object, parse_bytes};
use cputune_params::{Binder, TuneParams};
use cputune_schema::{Schema, ValidationError, validate};
use num_bigint::BigInt;
use thiserror::Error;

use crate::diagnostics::Diagnostics;
use crate::options::LoadOptions;
use crate::report::{ErrorReport, Origin, Severity, SourceFile};

pub const MISSING_VERSION_WARNING: &str =
    "JSON tuning file does not contain version information; compatibility cannot be verified";

pub const VALIDATION_FAILED: &str = "validation failed for the provided JSON data";

pub const DISPATCH_DISABLED_WARNING: &str = "JSON tuning enables dispatch scheduling but 'dispatch_constraints' is not available; disabling dispatch scheduling";

// ============================================================================
// Errors
// ============================================================================

/// Why a load stopped before binding.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open file {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error reading file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error parsing JSON data: {0}")]
    Syntax(#[from] JsonParseError),
    #[error("no JSON object found in the provided data")]
    NotAnObject { span: InputSpan },
    #[error("JSON tuning file was created with GCC version {found} but current GCC version is {expected}")]
    VersionMismatch { found: BigInt, expected: u32 },
    #[error("key 'tune_params' not found in JSON data")]
    MissingTuneParams { span: InputSpan },
    #[error("key 'tune_params' is not a JSON object")]
    TuneParamsNotObject {
        span: InputSpan,
        pointer: JsonPointer,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LoadError {
    /// Soft failures stop the load with a warning rather than an error.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            LoadError::NotAnObject { .. } | LoadError::MissingTuneParams { .. }
        )
    }
}

/// Turn a load error into the reports the user sees.
pub fn report_load_error(error: &LoadError, diagnostics: &mut Diagnostics) {
    let title = error.to_string();
    match error {
        LoadError::Open { path, source } | LoadError::Read { path, source } => {
            diagnostics.push(ErrorReport::global(Severity::Error, title).with_note(source.to_string()));
            diagnostics.push(ErrorReport::global(
                Severity::Error,
                format!("cannot read JSON data in {path}"),
            ));
        }
        LoadError::Syntax(e) => {
            diagnostics.push(ErrorReport::error(title, Origin::new(e.span)));
        }
        LoadError::NotAnObject { span } | LoadError::MissingTuneParams { span } => {
            diagnostics.push(ErrorReport::warning(
                title,
                Origin::at_value(*span, &JsonPointer::root()),
            ));
        }
        LoadError::VersionMismatch { .. } => {
            diagnostics.push(ErrorReport::global(Severity::Error, title).with_note(
                "JSON tuning files must be regenerated when switching between major GCC versions",
            ));
        }
        LoadError::TuneParamsNotObject { span, pointer } => {
            diagnostics.push(ErrorReport::error(title, Origin::at_value(*span, pointer)));
        }
        LoadError::Validation(e) => {
            diagnostics.push(ErrorReport::error(title, Origin::at_value(e.span, &e.pointer)));
            diagnostics.push(ErrorReport::global(Severity::Error, VALIDATION_FAILED));
        }
    }
}

// ============================================================================
// Loader
// ============================================================================

/// How far a load got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was bound onto the record. Binding diagnostics may still
    /// include errors.
    Applied,
    /// Stopped with a warning; the record is untouched.
    Skipped,
    /// Stopped with an error; the record is untouched.
    Failed,
}

/// The result of one load.
#[derive(Debug)]
pub struct LoadReport {
    pub outcome: LoadOutcome,
    pub diagnostics: Diagnostics,
}

impl LoadReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Loads tuning files with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct TuningLoader {
    options: LoadOptions,
}

impl TuningLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Read `path` and apply it to `params`.
    pub fn load_file(&self, path: impl AsRef<Path>, params: &mut TuneParams) -> LoadReport {
        let path = path.as_ref();
        let name = path.display().to_string();
        match std::fs::read(path) {
            Ok(bytes) => self.load_bytes(&name, &bytes, params),
            Err(source) => {
                tracing::debug!(file = %name, error = %source, "read failed");
                let error = if path.exists() {
                    LoadError::Read { path: name, source }
                } else {
                    LoadError::Open { path: name, source }
                };
                self.finish(Diagnostics::new(self.options.diagnostics), Err(error))
            }
        }
    }

    /// Apply in-memory text. `name` is used in rendered locations.
    pub fn load_str(&self, name: &str, text: &str, params: &mut TuneParams) -> LoadReport {
        self.load_bytes(name, text.as_bytes(), params)
    }

    pub fn load_bytes(&self, name: &str, bytes: &[u8], params: &mut TuneParams) -> LoadReport {
        let mut diagnostics = Diagnostics::new(self.options.diagnostics);
        diagnostics.set_file(SourceFile::new(name, String::from_utf8_lossy(bytes)));
        let result = self.apply(bytes, params, &mut diagnostics);
        self.finish(diagnostics, result)
    }

    fn finish(
        &self,
        mut diagnostics: Diagnostics,
        result: Result<LoadOutcome, LoadError>,
    ) -> LoadReport {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::debug!(%error, soft = error.is_soft(), "load stopped");
                report_load_error(&error, &mut diagnostics);
                if error.is_soft() {
                    LoadOutcome::Skipped
                } else {
                    LoadOutcome::Failed
                }
            }
        };
        LoadReport {
            outcome,
            diagnostics,
        }
    }

    fn apply(
        &self,
        bytes: &[u8],
        params: &mut TuneParams,
        diagnostics: &mut Diagnostics,
    ) -> Result<LoadOutcome, LoadError> {
        let root = parse_bytes(bytes, &self.options.parse)?;
        tracing::debug!("parsed tuning file");

        let Some(document) = root.as_object() else {
            return Err(LoadError::NotAnObject { span: root.span });
        };

        self.check_version(document, diagnostics)?;

        let schema = Schema::builtin();

        let tune_params = match document.get("tune_params") {
            None => return Err(LoadError::MissingTuneParams { span: root.span }),
            Some(node) => match node.as_object() {
                Some(object) => object,
                None => {
                    return Err(LoadError::TuneParamsNotObject {
                        span: node.span,
                        pointer: node.pointer.clone(),
                    });
                }
            },
        };

        validate(document, schema.root(), diagnostics)?;
        tracing::debug!("validated tuning file");

        Binder::new(diagnostics, self.options.mismatch_level).bind(tune_params, params);
        tracing::debug!("bound tune_params");

        if params.disable_unsupported_dispatch() {
            diagnostics.global_warning(DISPATCH_DISABLED_WARNING.to_string());
        }
        Ok(LoadOutcome::Applied)
    }

    /// A missing or non-integer version only warns.
    fn check_version(
        &self,
        document: &Object,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), LoadError> {
        let version = document
            .get("metadata")
            .and_then(|metadata| metadata.as_object())
            .and_then(|metadata| metadata.get("gcc_version"))
            .and_then(|version| version.as_integer());

        let Some(found) = version else {
            diagnostics.global_warning(MISSING_VERSION_WARNING.to_string());
            return Ok(());
        };

        let expected = self.options.toolchain_major;
        if *found != BigInt::from(expected) {
            return Err(LoadError::VersionMismatch {
                found: found.clone(),
                expected,
            });
        }
        Ok(())
    }
}

/// Apply `path` to `params` with default options.
pub fn load_tuning_file(path: impl AsRef<Path>, params: &mut TuneParams) -> LoadReport {
    TuningLoader::default().load_file(path, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> (TuneParams, LoadReport) {
        let mut params = TuneParams::default();
        let report = TuningLoader::default().load_str("t.json", text, &mut params);
        (params, report)
    }

    fn titles(report: &LoadReport) -> Vec<String> {
        report
            .diagnostics
            .reports()
            .iter()
            .map(|r| r.title.to_string())
            .collect()
    }

    #[test]
    fn test_soft_errors() {
        assert!(LoadError::MissingTuneParams {
            span: InputSpan::EMPTY
        }
        .is_soft());
        assert!(!LoadError::VersionMismatch {
            found: BigInt::from(15),
            expected: 16
        }
        .is_soft());
    }

    #[test]
    fn test_root_not_object() {
        let (params, report) = load("[1, 2]");
        assert_eq!(report.outcome, LoadOutcome::Skipped);
        assert!(!report.has_errors());
        assert_eq!(titles(&report), ["no JSON object found in the provided data"]);
        assert_eq!(params, TuneParams::default());
    }

    #[test]
    fn test_version_mismatch() {
        let (params, report) =
            load(r#"{"metadata": {"gcc_version": 15}, "tune_params": {"issue_rate": 9}}"#);
        assert_eq!(report.outcome, LoadOutcome::Failed);
        assert_eq!(
            titles(&report),
            ["JSON tuning file was created with GCC version 15 but current GCC version is 16"]
        );
        let report = report.diagnostics.reports().iter().next().unwrap();
        assert_eq!(report.elements.len(), 1);
        assert_eq!(params.issue_rate, 0);
    }

    #[test]
    fn test_non_integer_version_warns() {
        let (_, report) = load(r#"{"metadata": {"gcc_version": "16"}, "tune_params": {}}"#);
        assert_eq!(report.outcome, LoadOutcome::Failed);
        assert_eq!(
            titles(&report),
            [
                MISSING_VERSION_WARNING,
                "key 'metadata.gcc_version' expected to be an integer",
                VALIDATION_FAILED,
            ]
        );
    }

    #[test]
    fn test_tune_params_not_object() {
        let (_, report) = load(r#"{"metadata": {"gcc_version": 16}, "tune_params": 3}"#);
        assert_eq!(report.outcome, LoadOutcome::Failed);
        assert_eq!(titles(&report), ["key 'tune_params' is not a JSON object"]);
    }

    #[test]
    fn test_dispatch_flag_cleared_without_constraints() {
        let (params, report) = load(
            r#"{"metadata": {"gcc_version": 16}, "tune_params": {"extra_tuning_flags": 256}}"#,
        );
        assert_eq!(report.outcome, LoadOutcome::Applied);
        assert_eq!(params.extra_tuning_flags, 0);
        assert_eq!(titles(&report), [DISPATCH_DISABLED_WARNING]);
    }
}
