//! Byte offset to line/column conversion for diagnostics.
//!
//! Newlines follow [§ 4.5 Code points](https://infra.spec.whatwg.org/#code-points)
//! of the Infra Standard: "A newline is U+000A LF, U+000D CR, or U+000D CR
//! followed by U+000A LF." Each form counts as a single line break.
//!
//! Nothing here feeds back into tokenization; positions are only computed for
//! warnings and for callers that ask for them.

use serde::Serialize;

use super::token::Span;

/// A 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

/// Line/column form of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceCodeLocation {
    /// The byte range this location describes.
    pub span: Span,
    /// Position of `span.start`.
    pub start: Position,
    /// Position of `span.end`.
    pub end: Position,
}

impl SourceCodeLocation {
    /// Compute a location directly, without a prebuilt [`LineIndex`].
    ///
    /// Scans `source` once; prefer [`LineIndex`] when locating many spans.
    #[must_use]
    pub fn compute(source: &str, span: Span) -> Self {
        LineIndex::new(source).locate(source, span)
    }

    /// First and last line touched by the span.
    #[must_use]
    pub const fn lines(&self) -> (usize, usize) {
        (self.start.line, self.end.line)
    }

    /// Start and end columns of the span.
    #[must_use]
    pub const fn columns(&self) -> (usize, usize) {
        (self.start.column, self.end.column)
    }
}

/// Byte offsets of every line start in a source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Scan `source` for line breaks.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                // CR LF is a single newline
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 2;
                    line_starts.push(i);
                }
                b'\r' | b'\n' => {
                    i += 1;
                    line_starts.push(i);
                }
                _ => i += 1,
            }
        }
        Self { line_starts }
    }

    /// Number of lines in the indexed source.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of byte `offset` in `source`.
    ///
    /// `source` must be the string the index was built from. Offsets past the
    /// end are clamped to the end; offsets inside a multi-byte character are
    /// rounded down to its first byte.
    #[must_use]
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        // Index of the last line start at or before `offset`
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = source[line_start..offset].chars().count() + 1;
        Position { line, column }
    }

    /// Location of `span` in `source`.
    #[must_use]
    pub fn locate(&self, source: &str, span: Span) -> SourceCodeLocation {
        SourceCodeLocation {
            span,
            start: self.position(source, span.start),
            end: self.position(source, span.end),
        }
    }
}
