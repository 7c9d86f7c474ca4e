//! Error reporting IR for tuning loads.
//!
//! Every diagnostic raised while loading a tuning file becomes an
//! [`ErrorReport`]. Reports carry a byte span into the tuning file and the
//! JSON pointer of the value they are about, and are rendered through
//! annotate-snippets with a caret under the offending token.

use std::borrow::Cow;

use annotate_snippets::renderer::DecorStyle as AnnotateDecorStyle;
use annotate_snippets::{AnnotationKind as SnippetAnnotation, Group, Level, Renderer, Snippet};
use cputune_json::{InputSpan, JsonPointer, LineColumn, LineIndex};
use thisisplural::Plural;

// ============================================================================
// Source
// ============================================================================

/// The tuning file a set of reports points into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as given by the user, used in rendered locations.
    pub path: String,
    pub source: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    /// 1-based line and column of a span's start.
    pub fn locate(&self, span: InputSpan) -> LineColumn {
        LineIndex::new(&self.source).start_of(span)
    }

    fn clamp(&self, span: InputSpan) -> std::ops::Range<usize> {
        let start = (span.start as usize).min(self.source.len());
        let end = (span.end as usize).min(self.source.len()).max(start);
        start..end
    }
}

// ============================================================================
// Origin
// ============================================================================

/// A location in the tuning file.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    /// Byte range within the file.
    pub span: InputSpan,
    pub hints: OriginHints,
}

impl Origin {
    pub fn new(span: InputSpan) -> Self {
        Self {
            span,
            hints: OriginHints::default(),
        }
    }

    pub fn with_hints(span: InputSpan, hints: OriginHints) -> Self {
        Self { span, hints }
    }

    /// An origin for a JSON value, remembering its pointer.
    pub fn at_value(span: InputSpan, pointer: &JsonPointer) -> Self {
        Self::with_hints(span, OriginHints::default().with_pointer(pointer.clone()))
    }
}

/// Logical context for an origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginHints {
    /// JSON pointer of the value, shown as a breadcrumb above the report.
    pub pointer: Option<JsonPointer>,
}

impl OriginHints {
    #[must_use]
    pub fn with_pointer(mut self, pointer: JsonPointer) -> Self {
        self.pointer = Some(pointer);
        self
    }
}

// ============================================================================
// Severity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

/// Kind of annotation marker on a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Primary,
    Secondary,
}

// ============================================================================
// ErrorReport
// ============================================================================

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub title: Cow<'static, str>,
    pub severity: Severity,
    /// Where the problem is. `None` for file-level diagnostics such as the
    /// version check.
    pub primary_origin: Option<Origin>,
    /// Rendered in brackets after the level, as in `error[werror]`.
    pub code: Option<Cow<'static, str>>,
    pub elements: Vec<Element>,
}

impl ErrorReport {
    fn new(
        severity: Severity,
        title: impl Into<Cow<'static, str>>,
        origin: Option<Origin>,
    ) -> Self {
        Self {
            title: title.into(),
            severity,
            primary_origin: origin,
            code: None,
            elements: Vec::new(),
        }
    }

    pub fn error(title: impl Into<Cow<'static, str>>, origin: Origin) -> Self {
        Self::new(Severity::Error, title, Some(origin))
    }

    pub fn warning(title: impl Into<Cow<'static, str>>, origin: Origin) -> Self {
        Self::new(Severity::Warning, title, Some(origin))
    }

    pub fn note(title: impl Into<Cow<'static, str>>, origin: Origin) -> Self {
        Self::new(Severity::Note, title, Some(origin))
    }

    /// A report with no source location.
    pub fn global(severity: Severity, title: impl Into<Cow<'static, str>>) -> Self {
        Self::new(severity, title, None)
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    #[must_use]
    pub fn with_note(self, text: impl Into<Cow<'static, str>>) -> Self {
        self.with_element(Element::Note(text.into()))
    }

    /// The JSON pointer of the primary origin, if any.
    pub fn pointer(&self) -> Option<&JsonPointer> {
        self.primary_origin
            .as_ref()
            .and_then(|origin| origin.hints.pointer.as_ref())
    }
}

// ============================================================================
// ErrorReports
// ============================================================================

/// A collection of error reports in emission order.
#[derive(Debug, Clone, Default, Plural, PartialEq)]
pub struct ErrorReports(Vec<ErrorReport>);

impl ErrorReports {
    pub fn push(&mut self, report: ErrorReport) {
        self.0.push(report);
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ErrorReport> {
        self.0.get_mut(index)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.0.iter().filter(|r| r.severity == severity).count()
    }
}

impl std::fmt::Display for ErrorReports {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, report) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", report.title)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReports {}

// ============================================================================
// Element
// ============================================================================

/// Additional content attached to a report.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A labelled span in the same file.
    Annotation {
        origin: Origin,
        kind: AnnotationKind,
        label: Cow<'static, str>,
    },
    /// Rendered as "note: ...".
    Note(Cow<'static, str>),
}

// ============================================================================
// Rendering
// ============================================================================

/// Line-drawing characters used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorStyle {
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colors.
    pub styled: bool,
    pub decor: DecorStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            styled: true,
            decor: DecorStyle::Unicode,
        }
    }
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self {
            styled: false,
            decor: DecorStyle::Unicode,
        }
    }
}

/// Render one report.
///
/// Reports about a JSON value inside the document are preceded by a
/// `<file>: In JSON value '<pointer>'` breadcrumb line.
pub fn format_error_report(
    file: Option<&SourceFile>,
    report: &ErrorReport,
    options: &RenderOptions,
) -> String {
    let groups = build_snippet_groups(file, report);

    let renderer = if options.styled {
        Renderer::styled()
    } else {
        Renderer::plain()
    };
    let decor_style = match options.decor {
        DecorStyle::Unicode => AnnotateDecorStyle::Unicode,
        DecorStyle::Ascii => AnnotateDecorStyle::Ascii,
    };
    let rendered = renderer.decor_style(decor_style).render(&groups).to_string();

    match (file, report.pointer()) {
        (Some(file), Some(pointer)) if !pointer.is_root() => {
            format!("{}: In JSON value '{pointer}'\n{rendered}", file.path)
        }
        _ => rendered,
    }
}

/// Render reports in order, separated by blank lines.
pub fn format_error_reports(
    file: Option<&SourceFile>,
    reports: &ErrorReports,
    options: &RenderOptions,
) -> String {
    reports
        .iter()
        .map(|report| format_error_report(file, report, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn level_of(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
        Severity::Note => Level::NOTE,
    }
}

fn build_snippet_groups<'a>(
    file: Option<&'a SourceFile>,
    report: &'a ErrorReport,
) -> Vec<Group<'a>> {
    let mut groups = Vec::new();
    let mut title = level_of(report.severity).primary_title(report.title.as_ref());
    if let Some(code) = &report.code {
        title = title.id(code.as_ref());
    }

    let mut primary = match (file, &report.primary_origin) {
        (Some(file), Some(origin)) => title.element(
            Snippet::source(&file.source)
                .line_start(1)
                .path(&file.path)
                .annotation(SnippetAnnotation::Primary.span(file.clamp(origin.span))),
        ),
        _ => Group::with_title(title),
    };

    for element in &report.elements {
        if let Element::Note(text) = element {
            primary = primary.element(Level::NOTE.message(text.as_ref()));
        }
    }
    groups.push(primary);

    // Annotations get their own note group so each shows its own source line.
    let Some(file) = file else {
        return groups;
    };
    for element in &report.elements {
        if let Element::Annotation {
            origin,
            kind,
            label,
        } = element
        {
            let snippet_kind = match kind {
                AnnotationKind::Primary => SnippetAnnotation::Primary,
                AnnotationKind::Secondary => SnippetAnnotation::Context,
            };
            groups.push(
                Level::NOTE.primary_title(label.as_ref()).element(
                    Snippet::source(&file.source)
                        .line_start(1)
                        .path(&file.path)
                        .annotation(snippet_kind.span(file.clamp(origin.span))),
                ),
            );
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> SourceFile {
        SourceFile::new(
            "tune.json",
            "{\n  \"tune_params\": {\n    \"issue_rate\": \"10\"\n  }\n}\n",
        )
    }

    fn issue_rate_origin() -> Origin {
        let pointer = JsonPointer::root()
            .join_key("tune_params")
            .join_key("issue_rate");
        Origin::at_value(InputSpan::new(39, 43), &pointer)
    }

    #[test]
    fn test_locate_value() {
        assert_eq!(
            file().locate(InputSpan::new(39, 43)),
            LineColumn {
                line: 3,
                column: 19
            }
        );
    }

    #[test]
    fn test_render_breadcrumb_and_location() {
        let report = ErrorReport::error(
            "key 'tune_params.issue_rate' expected to be an integer",
            issue_rate_origin(),
        );
        let out = format_error_report(Some(&file()), &report, &RenderOptions::plain());
        assert!(out.starts_with("tune.json: In JSON value '/tune_params/issue_rate'\n"));
        assert!(out.contains("error: key 'tune_params.issue_rate' expected to be an integer"));
        assert!(out.contains("tune.json:3:19"));
        assert!(out.contains("\"issue_rate\": \"10\""));
    }

    #[test]
    fn test_render_global_report() {
        let report = ErrorReport::global(Severity::Error, "version mismatch")
            .with_note("regenerate the file");
        let out = format_error_report(Some(&file()), &report, &RenderOptions::plain());
        assert!(out.contains("error: version mismatch"));
        assert!(out.contains("regenerate the file"));
        assert!(!out.contains("In JSON value"));
    }

    #[test]
    fn test_render_root_has_no_breadcrumb() {
        let report = ErrorReport::warning(
            "key 'tune_params' not found in JSON data",
            Origin::at_value(InputSpan::new(0, 2), &JsonPointer::root()),
        );
        let out = format_error_report(
            Some(&SourceFile::new("empty.json", "{}")),
            &report,
            &RenderOptions::plain(),
        );
        assert!(out.starts_with("warning: key 'tune_params' not found in JSON data"));
        assert!(out.contains("empty.json:1:1"));
    }

    #[test]
    fn test_render_code() {
        let report = ErrorReport::global(Severity::Error, "promoted warning").with_code("werror");
        let out = format_error_report(None, &report, &RenderOptions::plain());
        assert!(out.starts_with("error[werror]: promoted warning"), "{out}");
    }

    #[test]
    fn test_span_is_clamped() {
        let report = ErrorReport::error("past the end", Origin::new(InputSpan::new(500, 900)));
        let out = format_error_report(Some(&file()), &report, &RenderOptions::plain());
        assert!(out.contains("error: past the end"));
    }

    #[test]
    fn test_reports_display_and_count() {
        let mut reports = ErrorReports::default();
        reports.push(ErrorReport::global(Severity::Warning, "first"));
        reports.push(ErrorReport::global(Severity::Error, "second"));
        assert_eq!(reports.to_string(), "first\nsecond");
        assert_eq!(reports.count(Severity::Error), 1);
        assert_eq!(reports.count(Severity::Warning), 1);
    }
}
