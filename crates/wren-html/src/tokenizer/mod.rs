//! Tokenizer core.
//!
//! The [`Tokenizer`] owns the cursor and runs a [`Grammar`](crate::Grammar)
//! over the unconsumed input, one pull at a time. Every recognized token goes
//! through a dispatch cycle over the registered [`Plugin`]s before it reaches
//! the caller.

/// Pull loop, cursor, and hook broadcasting.
pub mod core;
/// Offset to line/column conversion.
pub mod location;
/// Plugin trait, hook names, and the dispatch cycle.
pub mod plugin;
/// Token types produced by grammar rules.
pub mod token;

pub use self::core::{Tokenizer, Tokens};
pub use location::{LineIndex, Position, SourceCodeLocation};
pub use plugin::{Dispatch, Hook, Plugin};
pub use token::{
    Attribute, CData, Comment, CustomToken, Declaration, EndTag, ProcessingInstruction, Span,
    StartTag, Text, Token, TokenKind,
};
