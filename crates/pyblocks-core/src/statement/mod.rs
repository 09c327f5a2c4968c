//! Multi-line statement location
//!
//! Finds the full span of a bracket-unbalanced statement enclosing a cursor
//! line. The canonical algorithm is a whole-document cumulative balance scan;
//! it gives the same answer regardless of where inside the span the cursor
//! sits.

use crate::brackets::{cumulative_balance, net_bracket_delta};
use crate::classify::{indentation_level, is_closing_bracket_line};
use crate::document::{Document, LineSpan, Position, Range};
use crate::error::Result;

/// Locate the multi-line statement containing `cursor`, if any.
///
/// A line is inside an open statement when the cumulative bracket balance
/// entering it or leaving it is positive. The returned span runs from the
/// opening line through the line where the balance first returns to 0; a
/// document whose brackets never close ends the span at the last line.
///
/// Returns `None` when the cursor line is not part of a multi-line
/// statement, and `LineOutOfRange` for an invalid cursor.
pub fn locate_enclosing_statement(doc: &Document, cursor: usize) -> Result<Option<LineSpan>> {
    let cursor_text = doc.line(cursor)?;
    let balances = cumulative_balance(doc);

    let entering = if cursor == 0 { 0 } else { balances[cursor - 1] };
    let leaving = balances[cursor];
    if entering == 0 && leaving == 0 {
        return Ok(None);
    }

    let mut start = cursor;
    while start > 0 && balances[start - 1] > 0 {
        start -= 1;
    }

    // Cursor already on the line that closes the span: no forward scan.
    if entering > 0 && is_closing_bracket_line(cursor_text) {
        tracing::trace!(cursor, start, "cursor on closing bracket line");
        return Ok(Some(LineSpan::new(start, cursor)));
    }

    let mut end = cursor;
    while end < doc.last_line() && balances[end] > 0 {
        end += 1;
    }

    tracing::trace!(cursor, start, end, "located enclosing statement");
    Ok(Some(LineSpan::new(start, end)))
}

/// The enclosing statement as a [`Range`], anchored like a block range:
/// the opening line's first non-whitespace column through the closing
/// line's last column.
pub fn statement_range(doc: &Document, cursor: usize) -> Result<Option<Range>> {
    let Some(span) = locate_enclosing_statement(doc, cursor)? else {
        return Ok(None);
    };
    let start_text = doc.line(span.start)?;
    let end_text = doc.line(span.end)?;
    Ok(Some(Range::new(
        Position::new(span.start, indentation_level(start_text)),
        Position::new(span.end, end_text.chars().count()),
    )))
}

/// First line at or after `line` where a statement started there has its
/// brackets balanced again on a non-blank line.
///
/// A single-line statement answers with `line` itself. Runs off the end of
/// an unterminated document onto the last line.
pub fn skip_multi_line_statement(doc: &Document, line: usize) -> usize {
    let mut balance = 0i32;
    let mut current = line;
    while current <= doc.last_line() {
        let text = doc.lines()[current];
        balance += net_bracket_delta(text);
        if balance <= 0 && !text.trim().is_empty() {
            return current;
        }
        current += 1;
    }
    doc.last_line()
}
