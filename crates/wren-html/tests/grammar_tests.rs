//! Integration tests for grammar composition.

use wren_html::grammar::{
    CDataSectionParser, CommentParser, DeclarationParser, EndTagParser,
    ProcessingInstructionParser, StartTagParser, TextParser,
};
use wren_html::{Grammar, Token, TokenKind, TokenParser, Tokenizer};

#[test]
fn test_default_rule_order() {
    let grammar = Grammar::html();
    let names: Vec<&str> = grammar.rule_names().collect();
    assert_eq!(
        names,
        [
            "processing-instruction",
            "declaration",
            "comment",
            "cdata",
            "end-tag",
            "start-tag",
            "text"
        ]
    );
    assert_eq!(grammar.len(), 7);
    assert!(!grammar.is_empty());
}

#[test]
fn test_rule_tests() {
    assert!(ProcessingInstructionParser.test("<?php"));
    assert!(DeclarationParser.test("<!DOCTYPE html>"));
    assert!(!DeclarationParser.test("<!-- c -->"));
    assert!(!DeclarationParser.test("<![CDATA["));
    assert!(CommentParser.test("<!--"));
    assert!(CDataSectionParser.test("<![CDATA[x"));
    assert!(EndTagParser.test("</p>"));
    assert!(!EndTagParser.test("</ p>"));
    assert!(StartTagParser.test("<p>"));
    assert!(!StartTagParser.test("<3"));
    assert!(!StartTagParser.test("</p>"));
    assert!(TextParser.test("x"));
    assert!(!TextParser.test(""));
}

#[test]
fn test_without_rule() {
    let grammar = Grammar::builder().without("comment").build();
    assert!(!grammar.rule_names().any(|name| name == "comment"));
    let tokens = Tokenizer::with_grammar(grammar)
        .tokenize("<!-- x -->")
        .unwrap();
    // Without a comment rule the text fallback takes it
    assert!(tokens.iter().all(|token| token.kind() == TokenKind::Text));
}

#[test]
fn test_replace_rule() {
    /// Comments whose data is reported upper case.
    struct LoudComments;

    impl TokenParser for LoudComments {
        fn name(&self) -> &'static str {
            "comment"
        }

        fn test(&self, input: &str) -> bool {
            CommentParser.test(input)
        }

        fn parse(&self, input: &str, tokenizer: &mut Tokenizer<'_>) {
            CommentParser.parse(input, tokenizer);
            if let Some(Token::Comment(comment)) = tokenizer.current_token() {
                let mut loud = comment.clone();
                loud.data = loud.data.to_uppercase();
                tokenizer.replace_token(Token::Comment(loud));
            }
        }
    }

    let grammar = Grammar::builder().replace("comment", LoudComments).build();
    assert_eq!(grammar.len(), Grammar::html().len());
    let tokens = Tokenizer::with_grammar(grammar)
        .tokenize("<!-- hi -->")
        .unwrap();
    match &tokens[..] {
        [Token::Comment(comment)] => assert_eq!(comment.data, " HI "),
        other => panic!("Expected one Comment token, got {other:?}"),
    }
}

#[test]
fn test_shared_grammar() {
    let grammar = std::sync::Arc::new(Grammar::html());
    let mut first = Tokenizer::with_grammar(std::sync::Arc::clone(&grammar));
    let mut second = Tokenizer::with_grammar(grammar);
    assert_eq!(
        first.tokenize("<a>x</a>").unwrap(),
        second.tokenize("<a>x</a>").unwrap()
    );
}

#[test]
fn test_grammar_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("<p id={i}>{i}</p>");
                Tokenizer::new().tokenize(source).map(|tokens| tokens.len())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(3));
    }
}
