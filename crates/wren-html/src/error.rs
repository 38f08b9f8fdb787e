//! Diagnostics and fatal errors.
//!
//! Two tiers:
//! - [`Warning`]: recoverable problems in the markup. Delivered to plugins
//!   through the `warn` hook; tokenization always continues.
//! - [`TokenizerError`]: contract violations by the caller or by a grammar
//!   rule. These end the token sequence.

use core::fmt;

use serde::Serialize;
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

use crate::tokenizer::location::SourceCodeLocation;
use crate::tokenizer::token::Span;

/// What a [`Warning`] is about.
///
/// Plugins can filter on this instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// A tag opened with `<name` never reached its closing `>`.
    UnterminatedTag,
    /// A quoted attribute value has no closing quote.
    UnclosedQuote,
    /// A character inside a tag that cannot start an attribute.
    UnexpectedCharacter,
    /// `name=` with nothing after the equals sign.
    MissingAttributeValue,
    /// The same attribute name appears twice on one tag.
    DuplicateAttribute,
    /// An end tag carries attributes or other trailing content.
    EndTagWithAttributes,
    /// `<!--` without a matching `-->`.
    UnterminatedComment,
    /// `<!-->` or `<!--->`: a comment closed before it started.
    AbruptClosingOfEmptyComment,
    /// `<![CDATA[` without a matching `]]>`.
    UnterminatedCData,
    /// `<!KEYWORD` without a closing `>`.
    UnterminatedDeclaration,
    /// `<?` without a matching `?>`.
    UnterminatedProcessingInstruction,
    /// `&name;` where `name` is not a known character reference.
    UnknownNamedReference,
    /// A character reference that is not terminated by `;`.
    MissingSemicolon,
    /// `&#` or `&#x` with no digits after it.
    AbsenceOfDigits,
    /// A numeric reference to a null, surrogate, noncharacter, or
    /// out-of-range code point.
    InvalidNumericReference,
    /// A numeric reference to a control character.
    ControlCharacterReference,
    /// An attribute that is neither global nor allowed on its element.
    InvalidAttribute,
    /// Raised by a plugin for its own reasons.
    Custom,
}

/// A recoverable problem found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Category of the problem.
    pub kind: WarningKind,
    /// Human-readable description.
    pub message: String,
    /// Offending range in the source.
    pub span: Span,
    /// Line/column form of `span`, filled in when the source is known.
    pub location: Option<SourceCodeLocation>,
}

impl Warning {
    /// Create a warning without a resolved location.
    #[must_use]
    pub fn new(kind: WarningKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            location: None,
        }
    }

    /// Move the warning's span forward by `offset` bytes.
    ///
    /// Used to map warnings raised on a substring (e.g. an attribute value)
    /// back onto the full source.
    #[must_use]
    pub const fn shifted(mut self, offset: usize) -> Self {
        self.span = self.span.shifted(offset);
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(
                f,
                "{}:{}: {} [{}]",
                location.start.line, location.start.column, self.message, self.kind
            ),
            None => write!(f, "{}: {} [{}]", self.span, self.message, self.kind),
        }
    }
}

/// A contract violation that ends tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// Tokens were pulled before a source was installed with `start`.
    #[error("no source installed: call start() before pulling tokens")]
    NotStarted,
    /// A full pass over the grammar neither produced a token nor moved the
    /// cursor, so the next pass would do the same forever.
    #[error("no grammar rule made progress at byte {position}")]
    NoProgress {
        /// Cursor position where tokenization stalled.
        position: usize,
    },
    /// A rule emitted a token without consuming any input.
    #[error("grammar rule `{rule}` emitted a token without consuming input at byte {position}")]
    EmptyToken {
        /// Name of the offending rule.
        rule: &'static str,
        /// Cursor position of the empty token.
        position: usize,
    },
}
