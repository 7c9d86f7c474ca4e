//! Collects the diagnostics raised during one load.

use cputune_json::{JsonDiagnostics, LineColumn, Node};

use crate::report::{
    AnnotationKind, Element, ErrorReport, ErrorReports, Origin, RenderOptions, Severity,
    SourceFile, format_error_reports,
};

/// How warnings are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagnosticOptions {
    /// Drop warnings and their follow-up notes.
    pub suppress_warnings: bool,
    /// Promote warnings to errors.
    pub warnings_as_errors: bool,
}

/// A [`JsonDiagnostics`] sink that keeps [`ErrorReport`]s.
///
/// A note is attached to the report emitted just before it, so a warning and
/// its explanation travel together. Notes after a suppressed warning are
/// dropped along with it.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    options: DiagnosticOptions,
    file: Option<SourceFile>,
    reports: ErrorReports,
    /// Report the next note is attached to.
    last: Option<usize>,
    /// Set after a suppressed warning until the next report.
    muted: bool,
}

impl Diagnostics {
    pub fn new(options: DiagnosticOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> DiagnosticOptions {
        self.options
    }

    /// Attach the file that node-anchored reports point into.
    pub fn set_file(&mut self, file: SourceFile) {
        self.file = Some(file);
    }

    pub fn file(&self) -> Option<&SourceFile> {
        self.file.as_ref()
    }

    /// Record a report after applying the warning options.
    ///
    /// Returns `false` if the report was a suppressed warning.
    pub fn push(&mut self, mut report: ErrorReport) -> bool {
        if report.severity == Severity::Warning {
            if self.options.suppress_warnings {
                tracing::trace!(title = %report.title, "warning suppressed");
                self.last = None;
                self.muted = true;
                return false;
            }
            if self.options.warnings_as_errors {
                report.severity = Severity::Error;
                report = report.with_code("werror");
            }
        }
        tracing::debug!(severity = ?report.severity, title = %report.title, "diagnostic");
        self.muted = false;
        self.last = Some(self.reports.len());
        self.reports.push(report);
        true
    }

    /// Attach an element to the previous report, or emit it as a standalone
    /// note when there is none.
    fn attach(&mut self, element: Element, standalone: ErrorReport) {
        if self.muted {
            return;
        }
        match self.last.and_then(|index| self.reports.get_mut(index)) {
            Some(report) => report.elements.push(element),
            None => {
                self.reports.push(standalone);
            }
        }
    }

    pub fn reports(&self) -> &ErrorReports {
        &self.reports
    }

    pub fn into_reports(self) -> ErrorReports {
        self.reports
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.reports.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.reports.count(Severity::Warning)
    }

    /// Line and column of a report's primary origin in the attached file.
    pub fn locate(&self, report: &ErrorReport) -> Option<LineColumn> {
        let origin = report.primary_origin.as_ref()?;
        Some(self.file.as_ref()?.locate(origin.span))
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        format_error_reports(self.file.as_ref(), &self.reports, options)
    }
}

fn origin_of(node: &Node) -> Origin {
    Origin::at_value(node.span, &node.pointer)
}

impl JsonDiagnostics for Diagnostics {
    fn error(&mut self, node: &Node, message: String) {
        self.push(ErrorReport::error(message, origin_of(node)));
    }

    fn warning(&mut self, node: &Node, message: String) -> bool {
        self.push(ErrorReport::warning(message, origin_of(node)))
    }

    fn note(&mut self, node: &Node, message: String) {
        let origin = origin_of(node);
        let anchored_at_last = self
            .last
            .and_then(|index| self.reports.iter().nth(index))
            .and_then(|report| report.primary_origin.as_ref())
            .is_some_and(|last| last.span == origin.span);
        if anchored_at_last {
            self.attach(
                Element::Note(message.clone().into()),
                ErrorReport::note(message, origin),
            );
        } else {
            self.attach(
                Element::Annotation {
                    origin: origin.clone(),
                    kind: AnnotationKind::Secondary,
                    label: message.clone().into(),
                },
                ErrorReport::note(message, origin),
            );
        }
    }

    fn global_error(&mut self, message: String) {
        self.push(ErrorReport::global(Severity::Error, message));
    }

    fn global_warning(&mut self, message: String) -> bool {
        self.push(ErrorReport::global(Severity::Warning, message))
    }

    fn global_note(&mut self, message: String) {
        self.attach(
            Element::Note(message.clone().into()),
            ErrorReport::global(Severity::Note, message),
        );
    }
}

#[cfg(test)]
mod tests {
    use cputune_json::{InputSpan, JsonPointer, Value};

    use super::*;

    fn first(diagnostics: &Diagnostics) -> &ErrorReport {
        diagnostics.reports().iter().next().unwrap()
    }

    fn node(start: usize, end: usize) -> Node {
        Node {
            value: Value::Null,
            span: InputSpan::new(start, end),
            pointer: JsonPointer::root().join_key("issue_rate"),
        }
    }

    #[test]
    fn test_note_attaches_to_previous_warning() {
        let mut diagnostics = Diagnostics::default();
        assert!(diagnostics.warning(&node(3, 7), "expected an integer value...".into()));
        diagnostics.note(&node(3, 7), "...but got 'null' instead".into());

        assert_eq!(diagnostics.reports().len(), 1);
        let report = first(&diagnostics);
        assert_eq!(
            report.elements,
            vec![Element::Note("...but got 'null' instead".into())]
        );
    }

    #[test]
    fn test_note_elsewhere_becomes_annotation() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.error(&node(3, 7), "conflict".into());
        diagnostics.note(&node(10, 12), "first override here".into());

        let report = first(&diagnostics);
        assert!(matches!(
            report.elements.as_slice(),
            [Element::Annotation {
                kind: AnnotationKind::Secondary,
                ..
            }]
        ));
    }

    #[test]
    fn test_note_without_report_is_standalone() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.global_note("on its own".into());
        assert_eq!(diagnostics.reports().len(), 1);
        assert_eq!(first(&diagnostics).severity, Severity::Note);
    }

    #[test]
    fn test_suppressed_warning_drops_note() {
        let mut diagnostics = Diagnostics::new(DiagnosticOptions {
            suppress_warnings: true,
            ..Default::default()
        });
        diagnostics.error(&node(0, 1), "kept".into());
        assert!(!diagnostics.warning(&node(3, 7), "dropped".into()));
        diagnostics.note(&node(3, 7), "also dropped".into());

        assert_eq!(diagnostics.reports().len(), 1);
        assert!(first(&diagnostics).elements.is_empty());
        assert_eq!(diagnostics.warning_count(), 0);
    }

    #[test]
    fn test_warnings_as_errors() {
        let mut diagnostics = Diagnostics::new(DiagnosticOptions {
            warnings_as_errors: true,
            ..Default::default()
        });
        assert!(diagnostics.global_warning("promoted".into()));
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(first(&diagnostics).code.as_deref(), Some("werror"));
    }

    #[test]
    fn test_locate_needs_file() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.error(&node(3, 4), "here".into());
        let report = first(&diagnostics).clone();
        assert_eq!(diagnostics.locate(&report), None);

        diagnostics.set_file(SourceFile::new("t.json", "{\n  1\n}"));
        assert_eq!(
            diagnostics.locate(&report),
            Some(LineColumn { line: 2, column: 2 })
        );
    }
}
