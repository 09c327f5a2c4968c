//! Bracket-balance scanning
//!
//! Bracket balance is the one indentation-independent signal for statements
//! that span lines (multi-line calls, collection literals, parenthesized
//! expressions). Indentation resumes arbitrarily inside such spans, so the
//! block range finder combines this signal with its indentation walk.
//!
//! String and comment content is stripped before counting, one line at a
//! time. Multi-line string literals are not tracked; an unterminated quote
//! swallows the rest of its line, which is the conservative choice.

use crate::document::Document;

/// Strip a line down to its code-relevant characters: the `#` comment suffix
/// is dropped, and the contents of single- and double-quoted string literals
/// (including the quotes) are removed. Backslash escapes inside strings are
/// honored, so `'don\'t'` is treated as one literal.
pub fn strip_noise(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    let mut in_quote: Option<char> = None;

    while let Some(c) = chars.next() {
        match in_quote {
            Some(quote) => {
                if c == '\\' {
                    chars.next();
                } else if c == quote {
                    in_quote = None;
                }
            }
            None => match c {
                '#' => break,
                '\'' | '"' => in_quote = Some(c),
                _ => out.push(c),
            },
        }
    }
    out
}

/// Net count of unmatched brackets on this line: openers minus closers on
/// the noise-stripped text.
pub fn net_bracket_delta(text: &str) -> i32 {
    strip_noise(text)
        .chars()
        .map(|c| match c {
            '(' | '[' | '{' => 1,
            ')' | ']' | '}' => -1,
            _ => 0,
        })
        .sum()
}

/// True when the line leaves brackets open, so the statement continues onto
/// the next line.
pub fn is_open_continuation(text: &str) -> bool {
    net_bracket_delta(text) > 0
}

/// True when a line can end a statement: it has content and leaves no
/// brackets open.
pub fn is_statement_end(text: &str) -> bool {
    !text.trim().is_empty() && !is_open_continuation(text)
}

/// Running bracket balance through each line of the document, clamped at 0.
///
/// Unmatched closers at top level do not represent a continuation, so the
/// accumulator never goes negative. A line is inside an open statement when
/// the balance entering it or leaving it is positive.
pub fn cumulative_balance(doc: &Document) -> Vec<i32> {
    let mut balance = 0i32;
    doc.lines()
        .iter()
        .map(|line| {
            balance = (balance + net_bracket_delta(line)).max(0);
            balance
        })
        .collect()
}
