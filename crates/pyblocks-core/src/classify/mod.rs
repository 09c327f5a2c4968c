//! Line classification predicates
//!
//! Pure functions over a single line's text. These carry no document context:
//! each predicate looks only at the text after leading whitespace. They feed
//! the block range finder and the header navigator, which combine them with
//! indentation and bracket-balance signals.

use regex::Regex;
use std::sync::OnceLock;

/// Number of leading whitespace characters; 0 for a blank or empty line.
pub fn indentation_level(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    text.chars().take_while(|c| c.is_whitespace()).count()
}

/// True for a line that carries code: not empty, not whitespace-only, and not
/// a `#` comment line. A trailing comment after real code still counts as
/// code.
pub fn is_code_line(text: &str) -> bool {
    let trimmed = text.trim_start();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// True for a decorator line (`@name`), which must travel with the
/// definition that follows it.
pub fn is_decorator_line(text: &str) -> bool {
    text.trim_start().starts_with('@')
}

/// True for a clause that continues a preceding construct: `elif`, `else:`,
/// `except …:`, `finally:`.
///
/// These sit at the same indentation as the line that opened the construct
/// but must never terminate its block.
pub fn is_dependent_branch(text: &str) -> bool {
    static BRANCH_RE: OnceLock<Regex> = OnceLock::new();
    let re = BRANCH_RE
        .get_or_init(|| Regex::new(r"^\s*(?:except[\s:]|finally:|elif\s|else:)").unwrap());
    re.is_match(text)
}

/// True for a line that begins, after leading whitespace, with a closing
/// bracket (`)`, `]` or `}`).
///
/// Such a line closes a multi-line opener and is a continuation even at
/// shallow indentation. The prefix test (rather than closers-only) keeps a
/// `):`  line ending a multi-line `def` header inside its block.
pub fn is_closing_bracket_line(text: &str) -> bool {
    matches!(
        text.trim_start().chars().next(),
        Some(')') | Some(']') | Some('}')
    )
}

/// True for a line whose syntax opens a new block: function and class
/// definitions, control flow, `try`/`except`, `with` and `match`/`case`.
///
/// Used by header navigation only; it deliberately ignores indentation and
/// bracket balance, since navigation jumps between openers at any depth.
pub fn is_block_header(text: &str) -> bool {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    let re = HEADER_RE.get_or_init(|| {
        Regex::new(
            r"^\s*(?:def\s+\w|class\s+\w|if\s|elif\s|else\s*:|for\s|while\s|try\s*:|except.*:|with\s|match\s|case\s)",
        )
        .unwrap()
    });
    re.is_match(text)
}
