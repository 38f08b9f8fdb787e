use std::borrow::Cow;

use crate::entities::{decode_attribute_with, decode_with};
use crate::error::Warning;
use crate::tokenizer::{Dispatch, Hook, Plugin, StartTag, Text, Token};

/// Decodes character references in text tokens and attribute values.
///
/// Decoded tokens replace the originals for every later plugin and for the
/// caller. Spans keep pointing at the raw source text. Decoding warnings are
/// mapped onto source offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityDecoder;

impl EntityDecoder {
    fn decode_text(text: &Text, warnings: &mut Vec<Warning>) -> Option<Token> {
        let offset = text.span.start;
        match decode_with(&text.content, |w| warnings.push(w.shifted(offset))) {
            Cow::Borrowed(_) => None,
            Cow::Owned(content) => Some(Token::Text(Text {
                span: text.span,
                content,
            })),
        }
    }

    fn decode_start_tag(tag: &StartTag, warnings: &mut Vec<Warning>) -> Option<Token> {
        let mut decoded: Option<StartTag> = None;
        for (index, attr) in tag.attributes.iter().enumerate() {
            let offset = attr.value_span.map_or(attr.span.start, |span| span.start);
            let value = decode_attribute_with(&attr.value, |w| warnings.push(w.shifted(offset)));
            if let Cow::Owned(value) = value {
                decoded.get_or_insert_with(|| tag.clone()).attributes[index].value = value;
            }
        }
        decoded.map(Token::StartTag)
    }
}

impl Plugin for EntityDecoder {
    fn supports(&self, hook: &Hook) -> bool {
        *hook == Hook::TEXT || *hook == Hook::START_TAG
    }

    fn on_token(&mut self, cycle: &mut Dispatch<'_>) {
        let mut warnings = Vec::new();
        let replacement = match cycle.token() {
            Some(Token::Text(text)) => Self::decode_text(text, &mut warnings),
            Some(Token::StartTag(tag)) => Self::decode_start_tag(tag, &mut warnings),
            _ => None,
        };
        for warning in warnings {
            cycle.warn(warning.kind, warning.message, warning.span);
        }
        if let Some(token) = replacement {
            cycle.replace(token);
        }
    }
}
