//! Selection preparation for REPL submission
//!
//! A block selected inside a function body arrives indented, and a Python
//! REPL treats a blank line as the end of an indented suite. Sanitizing
//! dedents the selection to the first line's level, re-indents blank lines
//! to match the following code, and pads an indented tail so the REPL
//! closes the final suite.

/// Prepare a selected block for pasting into a REPL.
pub fn sanitize_selection(code: &str) -> String {
    let root = leading_whitespace(code);
    let mut lines: Vec<String> = code
        .split('\n')
        .map(|line| dedent(line, root).to_string())
        .collect();

    // Blank lines take the indentation of the next non-empty line so the
    // REPL does not terminate the current suite early.
    for index in 0..lines.len() {
        if !lines[index].is_empty() {
            continue;
        }
        let fill = lines[index + 1..]
            .iter()
            .find(|line| !line.is_empty())
            .map(|next| {
                next.chars()
                    .take_while(|c| c.is_whitespace())
                    .collect::<String>()
            });
        if let Some(fill) = fill {
            lines[index] = fill;
        }
    }

    let last_indented = lines
        .last()
        .map(|line| leading_whitespace(line) > 0)
        .unwrap_or(false);

    let mut out = lines.join("\n");
    if last_indented {
        // Close the trailing suite.
        out.push_str("\n\n");
    }
    out
}

/// Count of leading whitespace characters, blank lines included.
fn leading_whitespace(text: &str) -> usize {
    text.chars().take_while(|c| c.is_whitespace()).count()
}

/// Strip up to `root` leading whitespace characters; a line with less
/// leading whitespace is left untouched.
fn dedent(line: &str, root: usize) -> &str {
    if root == 0 || leading_whitespace(line) < root {
        return line;
    }
    line.char_indices()
        .nth(root)
        .map(|(index, _)| &line[index..])
        .unwrap_or("")
}
