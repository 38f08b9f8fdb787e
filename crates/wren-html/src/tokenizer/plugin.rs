//! Plugins and the hook dispatch cycle.
//!
//! A plugin declares which hooks it handles through [`Plugin::supports`] and
//! implements only those handlers; every other handler keeps its no-op
//! default and is never called. This is how grammars and post-processing are
//! added without touching the tokenizer core.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use super::token::{Span, Token, TokenKind};
use crate::error::{Warning, WarningKind};

/// Name of a hook a plugin can handle.
///
/// The tokenizer-level hooks ([`Hook::START`], [`Hook::END`], [`Hook::WARN`])
/// are fixed. Token hooks form an open set: one per built-in [`TokenKind`],
/// plus whatever names custom grammar rules emit on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Hook(Cow<'static, str>);

impl Hook {
    /// Called once per run with the full source.
    pub const START: Self = Self(Cow::Borrowed("start"));
    /// Called once when the token sequence is exhausted.
    pub const END: Self = Self(Cow::Borrowed("end"));
    /// Called for every diagnostic.
    pub const WARN: Self = Self(Cow::Borrowed("warn"));
    /// Start tag tokens.
    pub const START_TAG: Self = Self(Cow::Borrowed("start-tag"));
    /// End tag tokens.
    pub const END_TAG: Self = Self(Cow::Borrowed("end-tag"));
    /// Text tokens.
    pub const TEXT: Self = Self(Cow::Borrowed("text"));
    /// Comment tokens.
    pub const COMMENT: Self = Self(Cow::Borrowed("comment"));
    /// CDATA section tokens.
    pub const CDATA: Self = Self(Cow::Borrowed("cdata"));
    /// Processing instruction tokens.
    pub const PROCESSING_INSTRUCTION: Self = Self(Cow::Borrowed("processing-instruction"));
    /// Declaration tokens.
    pub const DECLARATION: Self = Self(Cow::Borrowed("declaration"));

    /// A hook with a custom name, for tokens from custom grammar rules.
    #[must_use]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The hook's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<TokenKind> for Hook {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::StartTag => Self::START_TAG,
            TokenKind::EndTag => Self::END_TAG,
            TokenKind::Text => Self::TEXT,
            TokenKind::Comment => Self::COMMENT,
            TokenKind::CData => Self::CDATA,
            TokenKind::ProcessingInstruction => Self::PROCESSING_INSTRUCTION,
            TokenKind::Declaration => Self::DECLARATION,
            TokenKind::Custom => Self(Cow::Borrowed("custom")),
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An observer registered with a [`Tokenizer`](super::Tokenizer).
///
/// Plugins are invoked in registration order. Tokens are lent to
/// [`Plugin::on_token`] for the duration of one dispatch cycle only; copy out
/// anything that must outlive it.
pub trait Plugin {
    /// Whether this plugin handles `hook`. Unsupported hooks are skipped
    /// without calling the matching handler.
    fn supports(&self, hook: &Hook) -> bool;

    /// [`Hook::START`]: a new run begins on `source`.
    fn start(&mut self, _source: &str) {}

    /// [`Hook::END`]: the run is over.
    fn end(&mut self) {}

    /// [`Hook::WARN`]: a recoverable problem was found.
    fn warn(&mut self, _warning: &Warning) {}

    /// Any token hook this plugin supports.
    ///
    /// The token can be inspected, edited, replaced, or skipped through
    /// `cycle`. Once a plugin skips it, later plugins do not see it.
    fn on_token(&mut self, _cycle: &mut Dispatch<'_>) {}
}

impl<P: Plugin + ?Sized> Plugin for &mut P {
    fn supports(&self, hook: &Hook) -> bool {
        (**self).supports(hook)
    }

    fn start(&mut self, source: &str) {
        (**self).start(source);
    }

    fn end(&mut self) {
        (**self).end();
    }

    fn warn(&mut self, warning: &Warning) {
        (**self).warn(warning);
    }

    fn on_token(&mut self, cycle: &mut Dispatch<'_>) {
        (**self).on_token(cycle);
    }
}

impl<P: Plugin + ?Sized> Plugin for Box<P> {
    fn supports(&self, hook: &Hook) -> bool {
        (**self).supports(hook)
    }

    fn start(&mut self, source: &str) {
        (**self).start(source);
    }

    fn end(&mut self) {
        (**self).end();
    }

    fn warn(&mut self, warning: &Warning) {
        (**self).warn(warning);
    }

    fn on_token(&mut self, cycle: &mut Dispatch<'_>) {
        (**self).on_token(cycle);
    }
}

/// One plugin's view of a dispatch cycle.
///
/// The cycle owns the current-token slot for its duration. Clearing the slot
/// with [`Dispatch::skip`] ends the cycle for every plugin after this one.
pub struct Dispatch<'a> {
    pub(super) hook: &'a Hook,
    pub(super) source: &'a str,
    pub(super) token: &'a mut Option<Token>,
    pub(super) cursor: &'a mut usize,
    pub(super) token_parser_index: &'a mut Option<usize>,
    pub(super) warnings: &'a mut Vec<Warning>,
}

impl Dispatch<'_> {
    /// The hook being dispatched.
    #[must_use]
    pub const fn hook(&self) -> &Hook {
        self.hook
    }

    /// The full source of the current run.
    #[must_use]
    pub const fn source(&self) -> &str {
        self.source
    }

    /// Current cursor position (just past the token being dispatched).
    #[must_use]
    pub const fn position(&self) -> usize {
        *self.cursor
    }

    /// The token being dispatched, unless a plugin already skipped it.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Mutable access to the token being dispatched.
    pub fn token_mut(&mut self) -> Option<&mut Token> {
        self.token.as_mut()
    }

    /// Substitute `token` for the current one. Later plugins and the caller
    /// see the replacement.
    pub fn replace(&mut self, token: Token) {
        *self.token = Some(token);
    }

    /// Discard the current token and make the tokenizer restart its grammar
    /// rules at the current cursor.
    ///
    /// Skipping without anything having consumed input leaves the tokenizer
    /// where it started; it reports that as
    /// [`TokenizerError::NoProgress`](crate::TokenizerError::NoProgress).
    pub fn skip(&mut self) {
        *self.token = None;
        *self.token_parser_index = None;
    }

    /// Consume up to `n` more bytes of input outside of any grammar rule.
    ///
    /// Clamped to the end of the source and rounded up to a character
    /// boundary. Returns the new cursor position.
    pub fn advance(&mut self, n: usize) -> usize {
        *self.cursor = next_char_boundary(self.source, *self.cursor + n);
        *self.cursor
    }

    /// Raise a diagnostic. It is broadcast to `warn` hooks once this
    /// dispatch cycle ends.
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>, span: Span) {
        self.warnings.push(Warning::new(kind, message, span));
    }
}

/// Smallest character boundary of `source` at or after `offset`, clamped to
/// the source length.
pub(super) fn next_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset += 1;
    }
    offset
}
