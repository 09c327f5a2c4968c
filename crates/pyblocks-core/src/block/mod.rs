//! Block range finding and smart selection
//!
//! A "block" is one logical execution unit: a statement with its bracket
//! continuations, a decorated definition with its body, or a control
//! construct with its dependent branches. The finder merges two orthogonal
//! signals into one range: the indentation walk (same-or-deeper lines belong
//! to the block) and bracket balance (an open bracket span never ends a
//! block mid-statement).

use crate::classify::{
    indentation_level, is_closing_bracket_line, is_code_line, is_decorator_line,
    is_dependent_branch,
};
use crate::document::{Document, LineSpan, Position, Range};
use crate::error::Result;
use crate::statement::locate_enclosing_statement;

/// Find the inclusive line span of the logical block containing `cursor`.
///
/// The start walks upward over contiguous decorator lines; the baseline
/// indentation is taken from the decorated header (or from the opening line
/// of an enclosing multi-line statement, so continuation lines anchor on the
/// logical statement). The end walks downward over same-or-deeper code
/// lines, keeping dependent branches and closing-bracket lines at the
/// baseline, and is extended through any bracket span left open at the
/// boundary.
pub fn find_block_span(doc: &Document, cursor: usize) -> Result<LineSpan> {
    doc.line(cursor)?;

    // Anchor on the opening line when the cursor sits inside a multi-line
    // statement, so every line of the span resolves to the same block.
    let origin = match locate_enclosing_statement(doc, cursor)? {
        Some(statement) => statement.start,
        None => cursor,
    };

    // Start boundary: the topmost decorator in the run above the origin.
    let mut start = origin;
    while start > 0 && is_decorator_line(doc.lines()[start - 1]) {
        start -= 1;
    }

    // When the cursor itself is on a decorator, the decorated header below
    // provides the baseline indentation.
    let mut anchor = origin;
    while anchor < doc.last_line() && is_decorator_line(doc.lines()[anchor]) {
        anchor += 1;
    }
    let baseline = indentation_level(doc.lines()[anchor]);

    // End boundary: walk down from the header.
    let mut end = anchor;
    for index in anchor + 1..doc.line_count() {
        let text = doc.lines()[index];
        if !is_code_line(text) {
            continue;
        }
        let indent = indentation_level(text);
        if indent > baseline {
            end = index;
            continue;
        }
        if indent < baseline {
            break;
        }
        if is_dependent_branch(text) || is_closing_bracket_line(text) {
            end = index;
        } else {
            // A same-indentation sibling statement ends the block.
            break;
        }
    }

    // Never truncate mid-statement: an open bracket span at the boundary
    // pulls the end down to its closing line.
    if let Some(statement) = locate_enclosing_statement(doc, end)? {
        if statement.end > end {
            end = statement.end;
        }
    }

    tracing::debug!(cursor, start, end, baseline, "resolved block span");
    Ok(LineSpan::new(start, end))
}

/// The block span as a [`Range`]: from the start line's first non-whitespace
/// column to the end line's last column.
pub fn find_block_range(doc: &Document, cursor: usize) -> Result<Range> {
    let span = find_block_span(doc, cursor)?;
    let start_text = doc.line(span.start)?;
    let end_text = doc.line(span.end)?;
    Ok(Range::new(
        Position::new(span.start, indentation_level(start_text)),
        Position::new(span.end, end_text.chars().count()),
    ))
}

/// The whole-line range of a single line, for the plain-selection fallback.
pub fn current_line_range(doc: &Document, line: usize) -> Result<Range> {
    let text = doc.line(line)?;
    Ok(Range::new(
        Position::new(line, 0),
        Position::new(line, text.chars().count()),
    ))
}

/// Resolve what smart execution should select.
///
/// A non-empty input selection is the user's explicit choice and passes
/// through unchanged. An empty (cursor-only) selection expands to the block
/// range when `block_select` is on, or to the current line when it is off.
pub fn smart_select(doc: &Document, selection: &Range, block_select: bool) -> Result<Range> {
    if !selection.is_empty() {
        return Ok(*selection);
    }
    if block_select {
        find_block_range(doc, selection.start.line)
    } else {
        current_line_range(doc, selection.start.line)
    }
}

/// First line after `line` that is code and not a decorator; the cursor
/// target for "execute and step". Saturates at the last line.
pub fn next_code_line(doc: &Document, line: usize) -> usize {
    let mut current = line;
    while current < doc.last_line() {
        current += 1;
        let text = doc.lines()[current];
        if is_code_line(text) && !is_decorator_line(text) {
            break;
        }
    }
    current
}

#[cfg(test)]
mod tests;
