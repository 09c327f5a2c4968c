//! Document, position and range types.
//!
//! The analyzer works on an immutable, line-indexed view of the source text.
//! Nothing here owns the text; a [`Document`] borrows it for the duration of
//! one query and every result is derived fresh from it.

use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};

/// A cursor location: 0-based line and character offset within that line.
///
/// Character offsets count `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A span of text between two positions, `start <= end`.
///
/// A degenerate range (`start == end`) represents a cursor with no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// A cursor-only range at the given location.
    pub fn cursor(line: usize, character: usize) -> Self {
        let position = Position::new(line, character);
        Self {
            start: position,
            end: position,
        }
    }

    /// True when this range selects nothing (cursor only).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An inclusive pair of line indices, `start <= end`.
///
/// Block spans and multi-line statement spans are line-granular; converting
/// to a [`Range`] anchors at the start line's first non-whitespace column and
/// the end line's last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

/// An immutable, 0-indexed view over the lines of a source text.
///
/// A document always has at least one line; empty text is a single empty
/// line, matching editor document models.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        Self {
            lines: if lines.is_empty() { vec![""] } else { lines },
        }
    }

    /// Total number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the last line.
    pub fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Text of the line at `index`, or `LineOutOfRange`.
    pub fn line(&self, index: usize) -> Result<&'a str> {
        self.lines
            .get(index)
            .copied()
            .ok_or(AnalyzerError::LineOutOfRange {
                line: index,
                line_count: self.lines.len(),
            })
    }

    /// All lines, for whole-document scans.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// The full text of the lines in `span`, joined with `\n`.
    pub fn span_text(&self, span: LineSpan) -> Result<String> {
        // Validate the far end first so a bad span cannot yield partial text.
        self.line(span.end)?;
        Ok(self.lines[span.start..=span.end].join("\n"))
    }

    /// The text covered by `range`, honoring character offsets on the first
    /// and last line.
    pub fn range_text(&self, range: &Range) -> Result<String> {
        let start_text = self.line(range.start.line)?;
        let end_text = self.line(range.end.line)?;

        if range.start.line == range.end.line {
            let from = byte_offset(start_text, range.start.character);
            let to = byte_offset(start_text, range.end.character);
            return Ok(start_text[from..to].to_string());
        }

        let mut out = String::new();
        out.push_str(&start_text[byte_offset(start_text, range.start.character)..]);
        for index in range.start.line + 1..range.end.line {
            out.push('\n');
            out.push_str(self.lines[index]);
        }
        out.push('\n');
        out.push_str(&end_text[..byte_offset(end_text, range.end.character)]);
        Ok(out)
    }
}

/// Byte offset of the `character`-th char, saturating at the line's end.
fn byte_offset(text: &str, character: usize) -> usize {
    text.char_indices()
        .nth(character)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}
