//! Helper functions for the grammar rules.
//!
//! This module contains utility functions used throughout the rules:
//! - Input/character handling ("Consume the next input character")
//! - Lookahead ("If the next few characters are")
//! - Character classes for names, attribute names, and unquoted values
//! - Token production (advance, then emit)

use crate::tokenizer::{Token, Tokenizer};

// =============================================================================
// Scanner
// =============================================================================

/// Forward reader over the input suffix handed to a rule.
///
/// A scanner never touches the tokenizer; rules measure what they recognized
/// with it and only advance the tokenizer once the whole match is known.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the scanner within its input.
    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    /// The input not read yet.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Move back to an earlier position, e.g. after optional lookahead failed.
    pub(crate) fn rewind_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }

    /// Move to the end of the input.
    pub(crate) const fn skip_to_end(&mut self) {
        self.pos = self.input.len();
    }

    /// Peek at the current character without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// "Consume the next input character"
    pub(crate) fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// "If the next few characters are..."
    pub(crate) fn next_few_characters_are(&self, target: &str) -> bool {
        self.rest().starts_with(target)
    }

    /// Consume `target` if the input continues with it.
    pub(crate) fn consume_string(&mut self, target: &str) -> bool {
        if self.next_few_characters_are(target) {
            self.pos += target.len();
            true
        } else {
            false
        }
    }

    /// Consume characters while `predicate` holds and return them.
    pub(crate) fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let rest = self.rest();
        let len = rest.find(|c: char| !predicate(c)).unwrap_or(rest.len());
        self.pos += len;
        &self.input[start..self.pos]
    }

    /// Skip ASCII whitespace.
    pub(crate) fn skip_whitespace(&mut self) {
        let _ = self.consume_while(is_whitespace_char);
    }

    /// Consume everything up to and including `terminator`, returning the
    /// text before it, or `None` (consuming nothing) if it never appears.
    pub(crate) fn consume_until(&mut self, terminator: &str) -> Option<&'a str> {
        let rest = self.rest();
        let index = rest.find(terminator)?;
        self.pos += index + terminator.len();
        Some(&rest[..index])
    }
}

// =============================================================================
// Character Classes
// =============================================================================

/// [§ 4.6 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
///
/// "ASCII whitespace is U+0009 TAB, U+000A LF, U+000C FF, U+000D CR,
/// or U+0020 SPACE."
pub(crate) const fn is_whitespace_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

/// [Namespaces in XML § 3 NCName](https://www.w3.org/TR/xml-names/#NT-NCName)
///
/// `NameStartChar` minus `:`.
pub(crate) const fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | 'a'..='z'
        | '_'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}

/// [Namespaces in XML § 3 NCName](https://www.w3.org/TR/xml-names/#NT-NCName)
///
/// `NameChar` minus `:`.
pub(crate) const fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

/// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
///
/// "Attribute names must consist of one or more characters other than
/// controls, U+0020 SPACE, U+0022 ("), U+0027 ('), U+003E (>), U+002F (/),
/// U+003D (=), and noncharacters."
///
/// `<` is excluded as well so a stray tag opener ends the tag.
pub(crate) const fn is_attribute_name_char(c: char) -> bool {
    !is_whitespace_char(c) && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
}

/// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
///
/// "Unquoted attribute value syntax: ... must not contain any literal ASCII
/// whitespace, any U+0022 QUOTATION MARK characters ("), U+0027 APOSTROPHE
/// characters ('), U+003D EQUALS SIGN characters (=), U+003C LESS-THAN SIGN
/// characters (<), U+003E GREATER-THAN SIGN characters (>), or U+0060 GRAVE
/// ACCENT characters (`)"
pub(crate) const fn is_unquoted_value_char(c: char) -> bool {
    !is_whitespace_char(c) && !matches!(c, '"' | '\'' | '=' | '<' | '>' | '`')
}

// =============================================================================
// Names
// =============================================================================

/// A qualified name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QualifiedName<'a> {
    pub(crate) name: &'a str,
    pub(crate) prefix: Option<&'a str>,
    pub(crate) local_name: &'a str,
}

/// Consume `(prefix:)?local` where both parts are NCNames.
///
/// A colon that is not followed by a name start character is left unread.
pub(crate) fn consume_qualified_name<'a>(scanner: &mut Scanner<'a>) -> Option<QualifiedName<'a>> {
    let start = scanner.position();
    if !scanner.peek().is_some_and(is_name_start_char) {
        return None;
    }
    let first = scanner.consume_while(is_name_char);
    let before_colon = scanner.position();
    if scanner.consume_string(":") && scanner.peek().is_some_and(is_name_start_char) {
        let local_name = scanner.consume_while(is_name_char);
        let name = &scanner.input[start..scanner.position()];
        return Some(QualifiedName {
            name,
            prefix: Some(first),
            local_name,
        });
    }
    scanner.rewind_to(before_colon);
    Some(QualifiedName {
        name: first,
        prefix: None,
        local_name: first,
    })
}

/// Split an already-read name such as an attribute name at its first colon.
pub(crate) fn split_qualified_name(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() => (Some(prefix), local),
        _ => (None, name),
    }
}

// =============================================================================
// Token Production
// =============================================================================

/// Consume `len` bytes and emit `token` on its own hook.
///
/// `len` must be non-zero; the tokenizer rejects empty tokens.
pub(crate) fn produce(tokenizer: &mut Tokenizer<'_>, len: usize, token: Token) {
    debug_assert!(len > 0);
    let _ = tokenizer.advance(len);
    tokenizer.emit_token(token);
}
