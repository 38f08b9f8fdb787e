use core::fmt;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

use super::plugin::Hook;
use crate::syntax::attributes::{ScalarValue, scalar_value};

/// A half-open byte range `[start, end)` into the original source.
///
/// Offsets always refer to the unmodified source handed to
/// [`Tokenizer::start`](super::Tokenizer::start), never to a decoded or
/// otherwise rewritten copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// First byte covered by the span.
    pub start: usize,
    /// One past the last byte covered by the span.
    pub end: usize,
}

impl Span {
    /// Create a span. `start` must not exceed `end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift both ends of the span forward by `offset` bytes.
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// The slice of `source` covered by this span, if it is in bounds.
    #[must_use]
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// An attribute on a start tag.
///
/// Attribute names keep the case they were written in; classification in
/// [`crate::syntax`] compares names ASCII case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// The attribute name as written, including any `prefix:`.
    pub name: String,
    /// The attribute value with quotes removed. Empty for bare attributes.
    pub value: String,
    /// Namespace bound to the attribute's prefix, if it has a known one.
    pub namespace_uri: Option<String>,
    /// The whole `name="value"` text.
    pub span: Span,
    /// The value text without its quotes, if a value was written.
    pub value_span: Option<Span>,
}

impl Attribute {
    /// Create an attribute with no namespace and no source positions.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            namespace_uri: None,
            span: Span::default(),
            value_span: None,
        }
    }

    /// Returns true if this attribute's name matches `name`, ignoring ASCII case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Interpret the value as a boolean, number, or plain text.
    ///
    /// See [`scalar_value`] for the rules.
    #[must_use]
    pub fn scalar_value(&self) -> ScalarValue {
        scalar_value(&self.name, &self.value)
    }
}

/// `<name attr=value ...>` or `<name ... />`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartTag {
    /// The whole tag, from `<` to `>`.
    pub span: Span,
    /// Qualified name as written, e.g. `svg:rect` or `DIV`.
    pub name: String,
    /// Namespace prefix, if the name is qualified.
    pub prefix: Option<String>,
    /// Local part of the name.
    pub local_name: String,
    /// Namespace the element belongs to, when it can be resolved.
    pub namespace_uri: Option<String>,
    /// Attributes in source order. Names are unique (ASCII case-insensitive).
    pub attributes: Vec<Attribute>,
    /// Set when the tag was closed with `/>`.
    pub self_closing: bool,
    /// Set for HTML void elements such as `br` and `img`.
    pub void: bool,
}

impl StartTag {
    /// Look up an attribute by name, ignoring ASCII case.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.is_named(name))
    }

    /// Returns true if the element has no content to follow: either void or
    /// written with a self-closing slash.
    #[must_use]
    pub const fn is_unary(&self) -> bool {
        self.void || self.self_closing
    }
}

/// `</name>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndTag {
    /// The whole tag, from `<` to `>`.
    pub span: Span,
    /// Qualified name as written.
    pub name: String,
    /// Namespace prefix, if the name is qualified.
    pub prefix: Option<String>,
    /// Local part of the name.
    pub local_name: String,
}

/// Character data between markup.
///
/// The content is raw source text; character references are only decoded if a
/// plugin such as [`EntityDecoder`](crate::plugins::EntityDecoder) does so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    /// Source range of the text.
    pub span: Span,
    /// The text itself.
    pub content: String,
}

/// `<!-- data -->`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// The whole comment including delimiters.
    pub span: Span,
    /// Everything between `<!--` and `-->`.
    pub data: String,
}

/// `<![CDATA[ data ]]>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CData {
    /// The whole section including delimiters.
    pub span: Span,
    /// Everything between `<![CDATA[` and `]]>`.
    pub data: String,
}

/// `<?target data?>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingInstruction {
    /// The whole instruction including delimiters.
    pub span: Span,
    /// Leading name, e.g. `xml` in `<?xml version="1.0"?>`.
    pub target: String,
    /// Everything after the target, leading whitespace removed.
    pub data: String,
}

/// `<!KEYWORD ...>`, e.g. a DOCTYPE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// The whole declaration including delimiters.
    pub span: Span,
    /// Leading keyword as written, e.g. `DOCTYPE`.
    pub keyword: String,
    /// Everything between `<!` and `>`.
    pub data: String,
}

/// A token produced by a grammar rule outside the built-in set.
///
/// Custom rules pick their own `name`, which doubles as the hook name the
/// token is emitted on unless the rule emits it on another hook explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomToken {
    /// Source range of the token.
    pub span: Span,
    /// Rule-defined token name.
    pub name: String,
    /// Rule-defined payload.
    pub data: String,
}

/// The kind of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// [`StartTag`]
    StartTag,
    /// [`EndTag`]
    EndTag,
    /// [`Text`]
    Text,
    /// [`Comment`]
    Comment,
    /// [`CData`]
    #[strum(serialize = "cdata")]
    #[serde(rename = "cdata")]
    CData,
    /// [`ProcessingInstruction`]
    ProcessingInstruction,
    /// [`Declaration`]
    Declaration,
    /// [`CustomToken`]
    Custom,
}

/// A semantic unit recognized from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Token {
    /// A start tag with its attributes.
    StartTag(StartTag),
    /// An end tag.
    EndTag(EndTag),
    /// Character data.
    Text(Text),
    /// A comment.
    Comment(Comment),
    /// A CDATA section.
    #[serde(rename = "cdata")]
    CData(CData),
    /// A processing instruction.
    ProcessingInstruction(ProcessingInstruction),
    /// A markup declaration such as `<!DOCTYPE html>`.
    Declaration(Declaration),
    /// A token from a custom grammar rule.
    Custom(CustomToken),
}

impl Token {
    /// Source range covered by the token.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::StartTag(tag) => tag.span,
            Self::EndTag(tag) => tag.span,
            Self::Text(text) => text.span,
            Self::Comment(comment) => comment.span,
            Self::CData(cdata) => cdata.span,
            Self::ProcessingInstruction(pi) => pi.span,
            Self::Declaration(decl) => decl.span,
            Self::Custom(custom) => custom.span,
        }
    }

    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::StartTag(_) => TokenKind::StartTag,
            Self::EndTag(_) => TokenKind::EndTag,
            Self::Text(_) => TokenKind::Text,
            Self::Comment(_) => TokenKind::Comment,
            Self::CData(_) => TokenKind::CData,
            Self::ProcessingInstruction(_) => TokenKind::ProcessingInstruction,
            Self::Declaration(_) => TokenKind::Declaration,
            Self::Custom(_) => TokenKind::Custom,
        }
    }

    /// The hook this token is dispatched on by default.
    ///
    /// Custom tokens use their own name; everything else uses its kind.
    #[must_use]
    pub fn hook(&self) -> Hook {
        match self {
            Self::Custom(custom) => Hook::named(custom.name.clone()),
            _ => Hook::from(self.kind()),
        }
    }

    /// Returns the start tag payload, if this is a start tag.
    #[must_use]
    pub const fn as_start_tag(&self) -> Option<&StartTag> {
        match self {
            Self::StartTag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a text token.
    #[must_use]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag(tag) => {
                write!(f, "<{}", tag.name)?;
                for attr in &tag.attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if tag.self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag(tag) => write!(f, "</{}>", tag.name),
            // Show whitespace explicitly so blank text tokens stay visible
            Self::Text(text) => write!(f, "Text({:?})", text.content),
            Self::Comment(comment) => write!(f, "<!--{}-->", comment.data),
            Self::CData(cdata) => write!(f, "<![CDATA[{}]]>", cdata.data),
            Self::ProcessingInstruction(pi) => {
                if pi.data.is_empty() {
                    write!(f, "<?{}?>", pi.target)
                } else {
                    write!(f, "<?{} {}?>", pi.target, pi.data)
                }
            }
            Self::Declaration(decl) => write!(f, "<!{}>", decl.data),
            Self::Custom(custom) => write!(f, "{}({:?})", custom.name, custom.data),
        }
    }
}
