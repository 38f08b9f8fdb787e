use super::TokenParser;
use super::helpers::produce;
use crate::tokenizer::{Span, Text, Token, Tokenizer};

/// Character data up to the next `<`.
///
/// The first character is always consumed, even when it is a `<` no other
/// rule recognized, so this rule accepts any non-empty input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextParser;

impl TokenParser for TextParser {
    fn name(&self) -> &'static str {
        "text"
    }

    fn test(&self, input: &str) -> bool {
        !input.is_empty()
    }

    fn parse(&self, input: &str, tokenizer: &mut Tokenizer<'_>) {
        let Some(first) = input.chars().next() else {
            return;
        };
        let first_len = first.len_utf8();
        let len = input[first_len..]
            .find('<')
            .map_or(input.len(), |index| first_len + index);
        let start = tokenizer.position();
        let token = Token::Text(Text {
            span: Span::new(start, start + len),
            content: input[..len].to_string(),
        });
        produce(tokenizer, len, token);
    }
}
