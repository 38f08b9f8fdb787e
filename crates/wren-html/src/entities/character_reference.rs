//! Character reference decoding.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! Decoding runs over finished text rather than inside the tokenizer, so the
//! same code serves text tokens, attribute values, and callers with plain
//! strings. Problems are reported as [`Warning`]s whose spans are byte ranges
//! into the decoded input; callers shift them onto the source.

use std::borrow::Cow;

use super::named_character_references::{LONGEST_LEGACY_NAME, lookup_entity};
use crate::error::{Warning, WarningKind};
use crate::tokenizer::Span;

/// Where the decoded text came from.
///
/// "If the character reference was consumed as part of an attribute..."
/// legacy names followed by `=` or an alphanumeric are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Text,
    Attribute,
}

/// Decode character references in text content, discarding warnings.
///
/// Returns the input unchanged (borrowed) when it has no references.
#[must_use]
pub fn decode(text: &str) -> Cow<'_, str> {
    decode_in(text, Context::Text, &mut |_| {})
}

/// Decode character references in text content, reporting each problem to
/// `on_warning`.
#[must_use]
pub fn decode_with(text: &str, mut on_warning: impl FnMut(Warning)) -> Cow<'_, str> {
    decode_in(text, Context::Text, &mut on_warning)
}

/// Decode character references in an attribute value, discarding warnings.
#[must_use]
pub fn decode_attribute(value: &str) -> Cow<'_, str> {
    decode_in(value, Context::Attribute, &mut |_| {})
}

/// Decode character references in an attribute value, reporting each
/// problem to `on_warning`.
#[must_use]
pub fn decode_attribute_with(value: &str, mut on_warning: impl FnMut(Warning)) -> Cow<'_, str> {
    decode_in(value, Context::Attribute, &mut on_warning)
}

fn decode_in<'a>(
    text: &'a str,
    context: Context,
    on_warning: &mut dyn FnMut(Warning),
) -> Cow<'a, str> {
    let mut decoded: Option<String> = None;
    let mut copied_to = 0;
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find('&') {
        let amp = search_from + offset;
        let Some((replacement, end)) = character_reference(text, amp, context, on_warning) else {
            search_from = amp + 1;
            continue;
        };
        let out = decoded.get_or_insert_with(|| String::with_capacity(text.len()));
        out.push_str(&text[copied_to..amp]);
        out.push_str(&replacement);
        copied_to = end;
        search_from = end;
    }

    match decoded {
        Some(mut out) => {
            out.push_str(&text[copied_to..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

/// Decode the reference starting at the `&` at byte `amp`.
///
/// Returns the replacement and the byte offset just past the reference, or
/// `None` if the `&` is literal text.
fn character_reference(
    text: &str,
    amp: usize,
    context: Context,
    on_warning: &mut dyn FnMut(Warning),
) -> Option<(Cow<'static, str>, usize)> {
    if text[amp + 1..].starts_with('#') {
        numeric_character_reference(text, amp, on_warning)
    } else {
        named_character_reference(text, amp, context, on_warning)
    }
}

/// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
fn named_character_reference(
    text: &str,
    amp: usize,
    context: Context,
    on_warning: &mut dyn FnMut(Warning),
) -> Option<(Cow<'static, str>, usize)> {
    let start = amp + 1;
    let rest = &text[start..];
    let name_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let name = &rest[..name_len];
    let semicolon = rest[name_len..].starts_with(';');

    if semicolon && let Some(value) = lookup_entity(&rest[..=name_len]) {
        return Some((Cow::Borrowed(value), start + name_len + 1));
    }

    // Longest legacy name that prefixes the alphanumeric run
    for len in (1..=name_len.min(LONGEST_LEGACY_NAME)).rev() {
        let Some(value) = lookup_entity(&name[..len]) else {
            continue;
        };
        let end = start + len;
        // "If the character reference was consumed as part of an attribute,
        // and the last character matched is not a U+003B SEMICOLON character
        // (;), and the next input character is either a U+003D EQUALS SIGN
        // character (=) or an ASCII alphanumeric, then, for historical
        // reasons, flush code points consumed as a character reference"
        let historical = text[end..]
            .chars()
            .next()
            .is_some_and(|c| c == '=' || c.is_ascii_alphanumeric());
        if context == Context::Attribute && historical {
            return None;
        }
        on_warning(Warning::new(
            WarningKind::MissingSemicolon,
            format!("character reference &{} is missing its semicolon", &name[..len]),
            Span::new(amp, end),
        ));
        return Some((Cow::Borrowed(value), end));
    }

    if semicolon {
        on_warning(Warning::new(
            WarningKind::UnknownNamedReference,
            format!("unknown named character reference &{name};"),
            Span::new(amp, start + name_len + 1),
        ));
    }
    None
}

/// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
fn numeric_character_reference(
    text: &str,
    amp: usize,
    on_warning: &mut dyn FnMut(Warning),
) -> Option<(Cow<'static, str>, usize)> {
    let bytes = text.as_bytes();
    let mut pos = amp + 2;
    let hexadecimal = matches!(bytes.get(pos), Some(b'x' | b'X'));
    if hexadecimal {
        pos += 1;
    }
    let radix = if hexadecimal { 16 } else { 10 };

    let digits_start = pos;
    let mut code = 0u32;
    while let Some(digit) = bytes.get(pos).and_then(|&b| char::from(b).to_digit(radix)) {
        // Saturate just past the Unicode range; larger values are all the same error
        code = code.saturating_mul(radix).saturating_add(digit).min(0x11_0000);
        pos += 1;
    }
    if pos == digits_start {
        on_warning(Warning::new(
            WarningKind::AbsenceOfDigits,
            "numeric character reference has no digits",
            Span::new(amp, pos),
        ));
        return None;
    }

    if bytes.get(pos) == Some(&b';') {
        pos += 1;
    } else {
        on_warning(Warning::new(
            WarningKind::MissingSemicolon,
            "numeric character reference is missing its semicolon",
            Span::new(amp, pos),
        ));
    }

    let c = checked_code_point(code, Span::new(amp, pos), on_warning);
    Some((Cow::Owned(c.to_string()), pos))
}

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// Null, out-of-range, surrogate, and noncharacter code points become
/// U+FFFD. C1 controls are remapped through Windows-1252 where it defines a
/// character. Other controls are kept, with a warning.
fn checked_code_point(code: u32, span: Span, on_warning: &mut dyn FnMut(Warning)) -> char {
    let problem = match code {
        0 => Some("character reference to U+0000 NULL".to_string()),
        0x11_0000.. => Some("character reference outside the Unicode range".to_string()),
        0xD800..=0xDFFF => Some(format!("character reference to surrogate U+{code:04X}")),
        _ if is_noncharacter(code) => Some(format!(
            "character reference to noncharacter U+{code:04X}"
        )),
        _ => None,
    };
    if let Some(message) = problem {
        on_warning(Warning::new(
            WarningKind::InvalidNumericReference,
            message,
            span,
        ));
        return char::REPLACEMENT_CHARACTER;
    }

    if code == 0x0D || (is_control(code) && !is_ascii_whitespace(code)) {
        on_warning(Warning::new(
            WarningKind::ControlCharacterReference,
            format!("character reference to control character U+{code:04X}"),
            span,
        ));
    }
    windows_1252(code)
        .or_else(|| char::from_u32(code))
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// [§ 4.6 Code points](https://infra.spec.whatwg.org/#noncharacter)
///
/// "A noncharacter is a code point that is in the range U+FDD0 to U+FDEF,
/// inclusive, or U+FFFE, U+FFFF, U+1FFFE, U+1FFFF, ..., U+10FFFE, or U+10FFFF."
const fn is_noncharacter(code: u32) -> bool {
    matches!(code, 0xFDD0..=0xFDEF) || (code & 0xFFFE) == 0xFFFE
}

/// [§ 4.6 Code points](https://infra.spec.whatwg.org/#control)
///
/// "A control is a C0 control or a code point in the range U+007F DELETE to
/// U+009F APPLICATION PROGRAM COMMAND, inclusive."
const fn is_control(code: u32) -> bool {
    matches!(code, 0x00..=0x1F | 0x7F..=0x9F)
}

const fn is_ascii_whitespace(code: u32) -> bool {
    matches!(code, 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

/// The C1 replacement table from the numeric character reference end state.
const fn windows_1252(code: u32) -> Option<char> {
    let c = match code {
        0x80 => '\u{20AC}', // €
        0x82 => '\u{201A}', // ‚
        0x83 => '\u{0192}', // ƒ
        0x84 => '\u{201E}', // „
        0x85 => '\u{2026}', // …
        0x86 => '\u{2020}', // †
        0x87 => '\u{2021}', // ‡
        0x88 => '\u{02C6}', // ˆ
        0x89 => '\u{2030}', // ‰
        0x8A => '\u{0160}', // Š
        0x8B => '\u{2039}', // ‹
        0x8C => '\u{0152}', // Œ
        0x8E => '\u{017D}', // Ž
        0x91 => '\u{2018}', // '
        0x92 => '\u{2019}', // '
        0x93 => '\u{201C}', // "
        0x94 => '\u{201D}', // "
        0x95 => '\u{2022}', // •
        0x96 => '\u{2013}', // –
        0x97 => '\u{2014}', // —
        0x98 => '\u{02DC}', // ˜
        0x99 => '\u{2122}', // ™
        0x9A => '\u{0161}', // š
        0x9B => '\u{203A}', // ›
        0x9C => '\u{0153}', // œ
        0x9E => '\u{017E}', // ž
        0x9F => '\u{0178}', // Ÿ
        _ => return None,
    };
    Some(c)
}
