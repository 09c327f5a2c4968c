use super::*;

fn span(content: &str, cursor: usize) -> (usize, usize) {
    let doc = Document::new(content);
    let result = find_block_span(&doc, cursor).unwrap();
    (result.start, result.end)
}

// ---------------------------------------------------------------------------
// Decorators
// ---------------------------------------------------------------------------

#[test]
fn single_decorator_before_function() {
    let content = "@timer\ndef some_function(x):\n    return x\n";
    assert_eq!(span(content, 1), (0, 2));
}

#[test]
fn multiple_decorators_before_function() {
    let content = "@contextmanager\n@decorator\ndef my_context():\n    yield 1\n";
    assert_eq!(span(content, 2), (0, 3));
}

#[test]
fn decorator_before_class() {
    let content = "@dataclass\nclass Test:\n    \"\"\"Docstring\"\"\"\n    def method():\n        pass\n";
    assert_eq!(span(content, 1), (0, 4));
}

#[test]
fn cursor_on_the_decorator_itself() {
    let content = "@timer\ndef some_function(x):\n    return x\n";
    assert_eq!(span(content, 0), (0, 2));
}

#[test]
fn line_without_preceding_decorator_starts_at_itself() {
    let content = "x = 1\ny = 2\n";
    assert_eq!(span(content, 1), (1, 1));
}

// ---------------------------------------------------------------------------
// Function and class definitions
// ---------------------------------------------------------------------------

#[test]
fn simple_function() {
    let content = "def test():\n    return ''\n\n";
    assert_eq!(span(content, 0), (0, 1));
}

#[test]
fn multi_line_function_parameters() {
    let content =
        "def function_with_params(\n    first=\"value\", second=\"value\"\n):\n    pass\n";
    assert_eq!(span(content, 0), (0, 3));
}

#[test]
fn function_with_nested_blocks() {
    let content =
        "def some_function(x):\n    for i in range(0, 10):\n        # asd\n        print(i)\n    return x\n";
    assert_eq!(span(content, 0), (0, 4));
}

#[test]
fn class_with_docstring_and_method() {
    let content = "class Test:\n    \"\"\"Docstring\n    \n    multi line\n    \"\"\"\n\n    def method():\n        breakpoint()\n        pass\n";
    assert_eq!(span(content, 0), (0, 8));
}

#[test]
fn class_with_multiple_methods() {
    let content = "class Test:\n    def __init__(self):\n        self.value = 0\n\n    def method(self):\n        return self.value\n";
    assert_eq!(span(content, 0), (0, 5));
}

// ---------------------------------------------------------------------------
// Control flow and dependent branches
// ---------------------------------------------------------------------------

#[test]
fn if_elif_else_stays_together() {
    let content = "if False:\n    print(1)\nelif True:\n    print(2)\nelse:\n    print(3)\n";
    assert_eq!(span(content, 0), (0, 5));
}

#[test]
fn try_except_finally_stays_together() {
    let content =
        "try:\n    print('yay')\nexcept Exception:\n    print('oh no')\nfinally:\n    print('done')\n";
    assert_eq!(span(content, 0), (0, 5));
}

#[test]
fn nested_control_flow() {
    let content =
        "if True:\n    try:\n        print('nested')\n    except:\n        print('error')\nelse:\n    print('else')\n";
    assert_eq!(span(content, 0), (0, 6));
}

#[test]
fn single_except_without_finally() {
    let content = "try:\n    risky_operation()\nexcept ValueError:\n    handle_error()\n";
    assert_eq!(span(content, 0), (0, 3));
}

#[test]
fn inner_block_does_not_capture_outer_else() {
    // From inside the elif body, the else branch at the outer indentation
    // belongs to the outer construct, not to the print statement.
    let content = "if False:\n    print(1)\nelif True:\n    print(2)\nelse:\n    print(3)\n";
    assert_eq!(span(content, 3), (3, 3));
}

// ---------------------------------------------------------------------------
// Multi-line statements
// ---------------------------------------------------------------------------

#[test]
fn multi_line_dictionary() {
    let content = "x = {\n    'key1': 'value',\n    'key2': 'value',\n}\n";
    assert_eq!(span(content, 0), (0, 3));
}

#[test]
fn multi_line_dictionary_from_interior_line() {
    let content = "x = {\n    'key1': 'value',\n    'key2': 'value',\n}\n";
    assert_eq!(span(content, 2), (0, 3));
}

#[test]
fn sibling_after_multi_line_statement_is_separate() {
    let content = "x = {\n    'k': 'v'\n}\ny = 1\n";
    assert_eq!(span(content, 0), (0, 2));
    assert_eq!(span(content, 3), (3, 3));
}

#[test]
fn single_line_comprehension_is_its_own_block() {
    let content = "total = 1\n[x + total for x in range(10)]\n";
    assert_eq!(span(content, 1), (1, 1));
}

#[test]
fn nested_dict_with_shallow_closing_bracket() {
    // The closing brace sits below the baseline; the open span pulls the
    // end down to it instead of truncating mid-statement.
    let content = "def f():\n    x = {\n        'k': 'v'\n}\n";
    assert_eq!(span(content, 1), (1, 3));
}

// ---------------------------------------------------------------------------
// Range anchoring and selection contract
// ---------------------------------------------------------------------------

#[test]
fn block_range_anchors_at_content_columns() {
    let doc = Document::new("    if x:\n        pass\n");
    let range = find_block_range(&doc, 0).unwrap();
    assert_eq!(range.start, Position::new(0, 4));
    assert_eq!(range.end, Position::new(1, 12));
}

#[test]
fn smart_select_expands_cursor_to_block() {
    let doc = Document::new("@timer\ndef f(x):\n    return x\n");
    let range = smart_select(&doc, &Range::cursor(1, 3), true).unwrap();
    assert_eq!((range.start.line, range.end.line), (0, 2));
}

#[test]
fn smart_select_passes_through_explicit_selections() {
    let doc = Document::new("def f(x):\n    return x\n");
    let explicit = Range::new(Position::new(1, 4), Position::new(1, 10));
    assert_eq!(smart_select(&doc, &explicit, true).unwrap(), explicit);
}

#[test]
fn smart_select_falls_back_to_current_line() {
    let doc = Document::new("def f(x):\n    return x\n");
    let range = smart_select(&doc, &Range::cursor(0, 0), false).unwrap();
    assert_eq!(range.start, Position::new(0, 0));
    assert_eq!(range.end, Position::new(0, 9));
}

#[test]
fn out_of_range_cursor_is_rejected() {
    let doc = Document::new("x = 1\n");
    assert!(find_block_span(&doc, 5).is_err());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn recomputing_from_the_found_start_is_stable() {
    let content = "@timer\ndef f(x):\n    if x:\n        return x\n    return 0\n\nx = f(1)\n";
    let doc = Document::new(content);
    for cursor in 0..doc.line_count() {
        let first = find_block_span(&doc, cursor).unwrap();
        let again = find_block_span(&doc, first.start).unwrap();
        assert_eq!(first, again, "unstable span from cursor {cursor}");
    }
}

#[test]
fn end_is_last_line_or_followed_by_a_non_continuation() {
    let content = "def f():\n    a = [\n        1,\n    ]\n    return a\n\nprint(f())\n";
    let doc = Document::new(content);
    let result = find_block_span(&doc, 0).unwrap();
    assert_eq!((result.start, result.end), (0, 4));
    // The terminating line sits at a shallower indentation than the body.
    let following = doc
        .lines()
        .iter()
        .skip(result.end + 1)
        .find(|line| crate::classify::is_code_line(line))
        .unwrap();
    assert_eq!(crate::classify::indentation_level(following), 0);
}

// ---------------------------------------------------------------------------
// Stepping
// ---------------------------------------------------------------------------

#[test]
fn next_code_line_skips_blanks_comments_and_decorators() {
    let content = "x = 1\n\n# comment\n@timer\ndef f():\n    pass\n";
    let doc = Document::new(content);
    assert_eq!(next_code_line(&doc, 0), 4);
}

#[test]
fn next_code_line_saturates_at_document_end() {
    let content = "x = 1\n\n\n";
    let doc = Document::new(content);
    assert_eq!(next_code_line(&doc, 0), 2);
}
