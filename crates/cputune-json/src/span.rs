//! Byte spans into the source text and their line/column translation.

/// A half-open byte range `start..end` in the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputSpan {
    pub start: u32,
    pub end: u32,
}

impl InputSpan {
    pub const EMPTY: InputSpan = InputSpan { start: 0, end: 0 };

    /// Offsets past `u32::MAX` saturate. The parser rejects inputs that long.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: u32::try_from(start).unwrap_or(u32::MAX),
            end: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The smallest span covering both `self` and `other`.
    pub fn merge(self, other: InputSpan) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// A 1-based line and column.
///
/// Columns count characters, not bytes, so a multi-byte character
/// before the position moves the column by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for LineColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Precomputed line starts for offset -> line/column lookups.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// Translate a byte offset. Offsets past the end clamp to the end of input.
    pub fn line_column(&self, offset: u32) -> LineColumn {
        let offset = (offset as usize).min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);
        LineColumn {
            line: line + 1,
            column: column + 1,
        }
    }

    pub fn start_of(&self, span: InputSpan) -> LineColumn {
        self.line_column(span.start)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_first_line() {
        let index = LineIndex::new("{}");
        assert_eq!(index.line_column(0), LineColumn { line: 1, column: 1 });
        assert_eq!(index.line_column(1), LineColumn { line: 1, column: 2 });
    }

    #[test]
    fn test_line_column_after_newlines() {
        let source = "{\n  \"tune_params\": {\n    \"issue_rate\": \"10\"\n  }\n}\n";
        let index = LineIndex::new(source);
        let offset = source.find("\"10\"").unwrap() as u32;
        assert_eq!(index.line_column(offset), LineColumn { line: 3, column: 19 });
        assert_eq!(index.line_count(), 6);
    }

    #[test]
    fn test_line_column_counts_characters() {
        let source = "\"é\": 1";
        let index = LineIndex::new(source);
        let offset = source.find('1').unwrap() as u32;
        assert_eq!(index.line_column(offset).column, 6);
    }

    #[test]
    fn test_line_column_clamps_past_end() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.line_column(100), LineColumn { line: 2, column: 3 });
    }

    #[test]
    fn test_span_merge() {
        let a = InputSpan::new(3, 5);
        let b = InputSpan::new(1, 4);
        assert_eq!(a.merge(b), InputSpan::new(1, 5));
        assert_eq!(a.len(), 2);
        assert!(InputSpan::EMPTY.is_empty());
    }
}
