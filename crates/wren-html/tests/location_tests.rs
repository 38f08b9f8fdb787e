//! Integration tests for byte offset to line/column conversion.

use wren_html::{LineIndex, Position, SourceCodeLocation, Span, Tokenizer};

#[test]
fn test_single_line() {
    let source = "<p>hello</p>";
    let location = SourceCodeLocation::compute(source, Span::new(3, 8));
    assert_eq!(location.start, Position { line: 1, column: 4 });
    assert_eq!(location.end, Position { line: 1, column: 9 });
    assert_eq!(location.lines(), (1, 1));
    assert_eq!(location.columns(), (4, 9));
}

#[test]
fn test_all_newline_forms() {
    let source = "a\nb\r\nc\rd";
    let index = LineIndex::new(source);
    assert_eq!(index.line_count(), 4);
    assert_eq!(index.position(source, 2), Position { line: 2, column: 1 });
    assert_eq!(index.position(source, 5), Position { line: 3, column: 1 });
    assert_eq!(index.position(source, 7), Position { line: 4, column: 1 });
}

#[test]
fn test_offset_on_line_break() {
    let source = "ab\r\ncd";
    let index = LineIndex::new(source);
    // The break itself belongs to the line it ends
    assert_eq!(index.position(source, 2), Position { line: 1, column: 3 });
    assert_eq!(index.position(source, 4), Position { line: 2, column: 1 });
}

#[test]
fn test_columns_count_characters() {
    let source = "é✓x";
    let index = LineIndex::new(source);
    // é is 2 bytes, ✓ is 3
    assert_eq!(index.position(source, 2), Position { line: 1, column: 2 });
    assert_eq!(index.position(source, 5), Position { line: 1, column: 3 });
    // Inside a character rounds down to its start
    assert_eq!(index.position(source, 3), Position { line: 1, column: 2 });
}

#[test]
fn test_clamped_past_end() {
    let source = "ab\ncd";
    let index = LineIndex::new(source);
    assert_eq!(index.position(source, 99), Position { line: 2, column: 3 });
}

#[test]
fn test_multi_line_span() {
    let source = "<!--\none\ntwo-->";
    let location = SourceCodeLocation::compute(source, Span::new(0, source.len()));
    assert_eq!(location.lines(), (1, 3));
    assert_eq!(location.columns(), (1, 7));
}

#[test]
fn test_tokenizer_location() {
    let mut tokenizer = Tokenizer::new();
    assert!(tokenizer.location(Span::new(0, 1)).is_none());

    tokenizer.start("line one\n<b>bold</b>");
    let tokens: Vec<_> = tokenizer.tokens().collect::<Result<_, _>>().unwrap();
    let location = tokenizer.location(tokens[1].span()).unwrap();
    assert_eq!(location.start, Position { line: 2, column: 1 });
    assert_eq!(location.end, Position { line: 2, column: 4 });
}
