//! Pluggable streaming markup tokenizer for Wren.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer core**: a pull-based token sequence driven by an ordered,
//!   swappable [`Grammar`], with plugin hooks that can inspect, replace, or
//!   veto each token before the caller sees it
//! - **Grammar rules**: processing instructions, declarations, comments,
//!   CDATA sections, end tags, start tags (qualified names, attributes,
//!   namespaces), and a text fallback
//! - **Attribute classification** ([HTML § Index: Attributes](https://html.spec.whatwg.org/multipage/indices.html#attributes-3)):
//!   global and per-element attribute tables
//! - **Entity codec** ([HTML § 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html)):
//!   decoding named and numeric character references, and escaping text
//! - **Source locations**: byte offsets to line/column for diagnostics
//!
//! # Not Implemented
//!
//! - Tree construction (insertion modes, implied tags, foster parenting)
//! - Script, style, and RCDATA content models: `<script>` bodies are
//!   tokenized like any other text
//!
//! # Example
//!
//! ```
//! use wren_html::{Token, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! let tokens = tokenizer.tokenize("<p class=intro>Hi</p>").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert!(matches!(&tokens[1], Token::Text(text) if text.content == "Hi"));
//! ```

/// Character reference decoding and text escaping.
pub mod entities;
/// Diagnostics and contract-violation errors.
pub mod error;
/// Grammar rules and rule sets.
pub mod grammar;
/// Plugins bundled with the tokenizer.
pub mod plugins;
/// Static HTML element and attribute tables.
pub mod syntax;
/// Tokenizer core, tokens, plugins, and locations.
pub mod tokenizer;

pub use entities::{decode, decode_attribute, encode};
pub use error::{TokenizerError, Warning, WarningKind};
pub use grammar::{Grammar, GrammarBuilder, TokenParser};
pub use syntax::{TagName, is_global_attribute, is_local_attribute, is_valid_attribute};
pub use tokenizer::{
    Attribute, CData, Comment, CustomToken, Declaration, Dispatch, EndTag, Hook, LineIndex,
    Plugin, Position, ProcessingInstruction, SourceCodeLocation, Span, StartTag, Text, Token,
    TokenKind, Tokenizer, Tokens,
};
