//! Integration tests for the tokenizer with the default HTML grammar.

use wren_html::{Token, TokenKind, Tokenizer, TokenizerError, WarningKind};

mod common;
use common::WarningLog;

/// Helper to tokenize a string with no plugins.
fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new()
        .tokenize(input)
        .expect("default grammar always makes progress")
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

#[test]
fn test_element_with_attributes_and_text() {
    let tokens = tokenize(r#"<div data-x="1" class="a">Hi</div>"#);
    assert_eq!(
        kinds(&tokens),
        [TokenKind::StartTag, TokenKind::Text, TokenKind::EndTag]
    );

    let Token::StartTag(tag) = &tokens[0] else {
        panic!("Expected StartTag token");
    };
    assert_eq!(tag.name, "div");
    let attrs: Vec<(&str, &str)> = tag
        .attributes
        .iter()
        .map(|attr| (attr.name.as_str(), attr.value.as_str()))
        .collect();
    assert_eq!(attrs, [("data-x", "1"), ("class", "a")]);

    assert_eq!(tokens[1].as_text().map(|t| t.content.as_str()), Some("Hi"));
    match &tokens[2] {
        Token::EndTag(tag) => assert_eq!(tag.name, "div"),
        other => panic!("Expected EndTag token, got {other:?}"),
    }
}

#[test]
fn test_comment_spans_whole_input() {
    let input = "<!-- note -->";
    let tokens = tokenize(input);
    assert_eq!(tokens.len(), 1);
    match &tokens[0] {
        Token::Comment(comment) => {
            assert_eq!(comment.data, " note ");
            assert_eq!(comment.span.start, 0);
            assert_eq!(comment.span.end, input.len());
        }
        other => panic!("Expected Comment token, got {other:?}"),
    }
}

#[test]
fn test_unclosed_quote_becomes_text() {
    let log = WarningLog::default();
    let input = r#"<div class="a"#;
    let tokens = Tokenizer::new()
        .plugin(log.clone())
        .tokenize(input)
        .expect("recoverable input never errors");

    assert_eq!(tokens.len(), 1);
    let text = tokens[0].as_text().expect("Expected Text token");
    assert_eq!(text.content, input);
    assert_eq!(text.span.end, input.len());
    assert_eq!(log.kinds(), [WarningKind::UnclosedQuote]);
}

#[test]
fn test_doctype_declaration() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 1);
    match &tokens[0] {
        Token::Declaration(decl) => {
            assert_eq!(decl.keyword, "DOCTYPE");
            assert_eq!(decl.data, "DOCTYPE html");
        }
        other => panic!("Expected Declaration token, got {other:?}"),
    }
}

#[test]
fn test_processing_instruction() {
    let tokens = tokenize(r#"<?xml version="1.0"?>"#);
    match &tokens[..] {
        [Token::ProcessingInstruction(pi)] => {
            assert_eq!(pi.target, "xml");
            assert_eq!(pi.data, r#"version="1.0""#);
        }
        other => panic!("Expected one ProcessingInstruction token, got {other:?}"),
    }
}

#[test]
fn test_cdata_section() {
    let tokens = tokenize("<![CDATA[x < y]]>after");
    assert_eq!(kinds(&tokens), [TokenKind::CData, TokenKind::Text]);
    match &tokens[0] {
        Token::CData(cdata) => assert_eq!(cdata.data, "x < y"),
        other => panic!("Expected CData token, got {other:?}"),
    }
}

#[test]
fn test_attribute_value_forms() {
    let tokens = tokenize("<input type=checkbox checked value='a b' title = \"t\">");
    let tag = tokens[0].as_start_tag().expect("Expected StartTag token");
    let attrs: Vec<(&str, &str)> = tag
        .attributes
        .iter()
        .map(|attr| (attr.name.as_str(), attr.value.as_str()))
        .collect();
    assert_eq!(
        attrs,
        [
            ("type", "checkbox"),
            ("checked", ""),
            ("value", "a b"),
            ("title", "t")
        ]
    );
    assert!(tag.void);
    assert!(tag.attributes[1].value_span.is_none());
}

#[test]
fn test_attribute_spans() {
    let input = r#"<a href="x.html">"#;
    let tokens = tokenize(input);
    let attr = &tokens[0].as_start_tag().expect("Expected StartTag token").attributes[0];
    assert_eq!(attr.span.slice(input), Some(r#"href="x.html""#));
    assert_eq!(
        attr.value_span.and_then(|span| span.slice(input)),
        Some("x.html")
    );
}

#[test]
fn test_self_closing_and_void() {
    let tokens = tokenize("<br><img src=a /><div/>");
    let tags: Vec<(bool, bool)> = tokens
        .iter()
        .filter_map(Token::as_start_tag)
        .map(|tag| (tag.void, tag.self_closing))
        .collect();
    assert_eq!(tags, [(true, false), (true, true), (false, true)]);
    assert!(tokens.iter().filter_map(Token::as_start_tag).all(|tag| tag.is_unary()));
}

#[test]
fn test_duplicate_attribute_dropped() {
    let log = WarningLog::default();
    let tokens = Tokenizer::new()
        .plugin(log.clone())
        .tokenize(r#"<p id="a" ID="b">"#)
        .unwrap();
    let tag = tokens[0].as_start_tag().unwrap();
    assert_eq!(tag.attributes.len(), 1);
    assert_eq!(tag.attribute("id").map(|a| a.value.as_str()), Some("a"));
    assert_eq!(log.kinds(), [WarningKind::DuplicateAttribute]);
}

#[test]
fn test_missing_attribute_value() {
    let log = WarningLog::default();
    let tokens = Tokenizer::new()
        .plugin(log.clone())
        .tokenize("<p title=>x")
        .unwrap();
    let tag = tokens[0].as_start_tag().unwrap();
    assert_eq!(tag.attributes[0].value, "");
    assert_eq!(log.kinds(), [WarningKind::MissingAttributeValue]);
}

#[test]
fn test_unexpected_character_in_tag() {
    let log = WarningLog::default();
    let tokens = Tokenizer::new()
        .plugin(log.clone())
        .tokenize(r#"<p "x" id=a>"#)
        .unwrap();
    let tag = tokens[0].as_start_tag().unwrap();
    assert!(tag.attribute("id").is_some());
    assert!(log.kinds().contains(&WarningKind::UnexpectedCharacter));
}

#[test]
fn test_unterminated_tag_falls_back_to_text() {
    let log = WarningLog::default();
    let tokens = Tokenizer::new()
        .plugin(log.clone())
        .tokenize("<div <p>")
        .unwrap();
    assert_eq!(kinds(&tokens), [TokenKind::Text, TokenKind::StartTag]);
    assert_eq!(tokens[0].as_text().unwrap().content, "<div ");
    assert_eq!(log.kinds(), [WarningKind::UnterminatedTag]);
}

#[test]
fn test_end_tag_with_trailing_content() {
    let log = WarningLog::default();
    let tokens = Tokenizer::new()
        .plugin(log.clone())
        .tokenize("</p class=x>")
        .unwrap();
    assert_eq!(kinds(&tokens), [TokenKind::EndTag]);
    assert_eq!(log.kinds(), [WarningKind::EndTagWithAttributes]);
}

#[test]
fn test_unterminated_comment_runs_to_end() {
    let log = WarningLog::default();
    let tokens = Tokenizer::new()
        .plugin(log.clone())
        .tokenize("<!-- open <p>")
        .unwrap();
    match &tokens[..] {
        [Token::Comment(comment)] => assert_eq!(comment.data, " open <p>"),
        other => panic!("Expected one Comment token, got {other:?}"),
    }
    assert_eq!(log.kinds(), [WarningKind::UnterminatedComment]);
}

#[test]
fn test_abruptly_closed_empty_comment() {
    for (input, comment_len) in [("<!-->x", 5), ("<!--->x", 6)] {
        let log = WarningLog::default();
        let tokens = Tokenizer::new()
            .plugin(log.clone())
            .tokenize(input)
            .unwrap();
        match &tokens[..] {
            [Token::Comment(comment), Token::Text(text)] => {
                assert!(comment.data.is_empty());
                assert_eq!(comment.span.len(), comment_len);
                assert_eq!(text.content, "x");
            }
            other => panic!("Expected Comment then Text for {input:?}, got {other:?}"),
        }
        assert_eq!(log.kinds(), [WarningKind::AbruptClosingOfEmptyComment]);
    }
    // `<!---->` is an ordinary empty comment
    let tokens = tokenize("<!---->x");
    assert_eq!(kinds(&tokens), [TokenKind::Comment, TokenKind::Text]);
}

#[test]
fn test_lone_angle_brackets_are_text() {
    let tokens = tokenize("a < b <3 </ >");
    assert!(tokens.iter().all(|token| token.kind() == TokenKind::Text));
    let joined: String = tokens
        .iter()
        .filter_map(Token::as_text)
        .map(|text| text.content.as_str())
        .collect();
    assert_eq!(joined, "a < b <3 </ >");
}

#[test]
fn test_prefixed_names() {
    let tokens = tokenize(r##"<svg:rect xlink:href="#a"></svg:rect>"##);
    let tag = tokens[0].as_start_tag().unwrap();
    assert_eq!(tag.prefix.as_deref(), Some("svg"));
    assert_eq!(tag.local_name, "rect");
    assert_eq!(tag.namespace_uri.as_deref(), Some(wren_html::syntax::namespace::ns::SVG));
    assert_eq!(
        tag.attributes[0].namespace_uri.as_deref(),
        Some(wren_html::syntax::namespace::ns::XLINK)
    );
    assert!(!tag.void);
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_non_ascii_text() {
    let input = "<p>héllo wörld ✓</p>";
    let tokens = tokenize(input);
    let text = tokens[1].as_text().unwrap();
    assert_eq!(text.content, "héllo wörld ✓");
    assert_eq!(text.span.slice(input), Some("héllo wörld ✓"));
}

#[test]
fn test_lazy_sequence() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.start("<a>b</a>");
    {
        let mut tokens = tokenizer.tokens();
        assert!(matches!(tokens.next(), Some(Ok(Token::StartTag(_)))));
    }
    // Pulling resumes where the previous iterator stopped
    assert_eq!(tokenizer.position(), 3);
    assert_eq!(tokenizer.remaining(), "b</a>");
    assert_eq!(tokenizer.tokens().count(), 2);
    assert!(tokenizer.is_eof());
}

#[test]
fn test_next_token_before_start() {
    let mut tokenizer = Tokenizer::new();
    assert_eq!(tokenizer.next_token(), Err(TokenizerError::NotStarted));
}

#[test]
fn test_restart_resets_state() {
    let mut tokenizer = Tokenizer::new();
    assert_eq!(tokenizer.tokenize("<a>").unwrap().len(), 1);
    assert_eq!(tokenizer.tokenize("x<b>y").unwrap().len(), 3);
    tokenizer.reset();
    assert_eq!(tokenizer.source(), None);
    assert_eq!(tokenizer.position(), 0);
}

#[test]
fn test_warning_locations() {
    let log = WarningLog::default();
    let _ = Tokenizer::new()
        .plugin(log.clone())
        .tokenize("<p>\n  <!-- open")
        .unwrap();
    let warnings = log.warnings();
    let location = warnings[0].location.expect("warnings carry locations");
    assert_eq!(location.start.line, 2);
    assert_eq!(location.start.column, 3);
}
