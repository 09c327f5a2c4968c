//! Block-header navigation
//!
//! Jumps between lines that open a block, independent of the block range
//! finder's notion of an execution unit. The scans are header-syntax-based
//! only; nesting depth does not matter, so navigation visits every opener.

use crate::classify::{indentation_level, is_block_header};
use crate::document::{Document, Position};
use crate::error::Result;
use crate::statement::skip_multi_line_statement;

/// Nearest block header at or above `line`.
pub fn block_header_from_line(doc: &Document, line: usize) -> Option<usize> {
    (0..=line.min(doc.last_line()))
        .rev()
        .find(|&index| is_block_header(doc.lines()[index]))
}

/// Position of the next block header after the cursor's enclosing header.
///
/// When no further header exists the cursor position is returned unchanged,
/// so the caller can treat the result as a no-op.
pub fn next_block_header(doc: &Document, position: Position) -> Result<Position> {
    doc.line(position.line)?;
    let reference = block_header_from_line(doc, position.line).unwrap_or(position.line);
    let target =
        (reference + 1..doc.line_count()).find(|&index| is_block_header(doc.lines()[index]));
    tracing::debug!(line = position.line, reference, ?target, "next block header");
    Ok(match target {
        Some(line) => Position::new(line, 0),
        None => position,
    })
}

/// Position of the previous block header before the cursor's enclosing
/// header; top of document when none exists.
pub fn previous_block_header(doc: &Document, position: Position) -> Result<Position> {
    doc.line(position.line)?;
    let reference = block_header_from_line(doc, position.line).unwrap_or(position.line);
    let target = (0..reference)
        .rev()
        .find(|&index| is_block_header(doc.lines()[index]));
    tracing::debug!(line = position.line, reference, ?target, "previous block header");
    Ok(match target {
        Some(line) => Position::new(line, 0),
        None => Position::new(0, 0),
    })
}

/// Nearest header above `line` with strictly smaller indentation: the
/// header of the enclosing outer block.
pub fn parent_block_header(doc: &Document, line: usize) -> Option<usize> {
    if line > doc.last_line() {
        return None;
    }
    let start_indent = indentation_level(doc.lines()[line]);
    (0..line).rev().find(|&index| {
        let text = doc.lines()[index];
        is_block_header(text) && indentation_level(text) < start_indent
    })
}

/// First header below `line` with strictly greater indentation: the first
/// block nested inside the one opened at `line`. A multi-line statement at
/// `line` is skipped before comparing indentation.
pub fn first_nested_block_header(doc: &Document, line: usize) -> Option<usize> {
    if line > doc.last_line() {
        return None;
    }
    let start = skip_multi_line_statement(doc, line);
    let start_indent = indentation_level(doc.lines()[start]);
    (start + 1..doc.line_count()).find(|&index| {
        let text = doc.lines()[index];
        is_block_header(text) && indentation_level(text) > start_indent
    })
}
