//! Start and end tags.
//!
//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
//!
//! Recovery differs from the delimited constructs: a tag that hits a `<` or
//! the end of input before its `>` is not a tag at all. The rule raises one
//! warning, matches nothing, and the text fallback takes the `<`.

use super::TokenParser;
use super::helpers::{
    Scanner, consume_qualified_name, is_attribute_name_char, is_name_start_char,
    is_unquoted_value_char, produce, split_qualified_name,
};
use crate::error::{Warning, WarningKind};
use crate::syntax::TagName;
use crate::syntax::namespace::{attribute_namespace, element_namespace};
use crate::tokenizer::{Attribute, EndTag, Span, StartTag, Text, Token, Tokenizer};

/// Returns true if `input` starts with `open` directly followed by a name
/// start character.
fn starts_tag(input: &str, open: &str) -> bool {
    input
        .strip_prefix(open)
        .and_then(|rest| rest.chars().next())
        .is_some_and(is_name_start_char)
}

/// `</name>`
///
/// Anything between the name and `>` is skipped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndTagParser;

impl TokenParser for EndTagParser {
    fn name(&self) -> &'static str {
        "end-tag"
    }

    fn test(&self, input: &str) -> bool {
        starts_tag(input, "</")
    }

    fn parse(&self, input: &str, tokenizer: &mut Tokenizer<'_>) {
        let start = tokenizer.position();
        let mut scanner = Scanner::new(input);
        let _ = scanner.consume_string("</");
        let Some(name) = consume_qualified_name(&mut scanner) else {
            return;
        };

        let trailing_start = scanner.position();
        let trailing = scanner.consume_while(|c| c != '>' && c != '<');
        if !scanner.consume_string(">") {
            tokenizer.warn(
                WarningKind::UnterminatedTag,
                format!("unterminated end tag </{}>", name.name),
                Span::new(start, start + scanner.position()),
            );
            return;
        }
        if !trailing.trim().is_empty() {
            tokenizer.warn(
                WarningKind::EndTagWithAttributes,
                format!("end tag </{}> has trailing content {:?}", name.name, trailing.trim()),
                Span::new(start + trailing_start, start + trailing_start + trailing.len()),
            );
        }

        let token = Token::EndTag(EndTag {
            span: Span::new(start, start + scanner.position()),
            name: name.name.to_string(),
            prefix: name.prefix.map(str::to_string),
            local_name: name.local_name.to_string(),
        });
        produce(tokenizer, scanner.position(), token);
    }
}

/// `<name attr=value ...>` or `<name ... />`
///
/// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
///
/// Attribute values may be double-quoted, single-quoted, unquoted, or absent.
/// Characters that cannot start an attribute are skipped with a warning, and
/// a repeated attribute name drops the later attribute with a warning. These
/// warnings are only raised once the tag is known to be complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartTagParser;

/// Outcome of scanning one attribute.
enum AttributeScan {
    Parsed(Attribute),
    /// A quoted value whose closing quote never appears.
    UnclosedQuote { quote_at: usize },
}

impl StartTagParser {
    fn scan_attribute(
        scanner: &mut Scanner<'_>,
        base: usize,
        warnings: &mut Vec<Warning>,
    ) -> AttributeScan {
        let attr_start = scanner.position();
        let name = scanner.consume_while(is_attribute_name_char);
        let after_name = scanner.position();
        scanner.skip_whitespace();
        if !scanner.consume_string("=") {
            // Whitespace after a bare attribute belongs to the tag
            scanner.rewind_to(after_name);
            return AttributeScan::Parsed(Attribute {
                name: name.to_string(),
                value: String::new(),
                namespace_uri: None,
                span: Span::new(base + attr_start, base + after_name),
                value_span: None,
            });
        }
        scanner.skip_whitespace();

        let (value, value_span) = match scanner.peek() {
            Some(quote @ ('"' | '\'')) => {
                let quote_at = scanner.position();
                let _ = scanner.consume();
                let value_start = scanner.position();
                let closing = if quote == '"' { "\"" } else { "'" };
                let Some(value) = scanner.consume_until(closing) else {
                    return AttributeScan::UnclosedQuote { quote_at };
                };
                let value_end = value_start + value.len();
                (value, Some(Span::new(base + value_start, base + value_end)))
            }
            Some(c) if is_unquoted_value_char(c) => {
                let value_start = scanner.position();
                let value = scanner.consume_while(is_unquoted_value_char);
                (value, Some(Span::new(base + value_start, base + scanner.position())))
            }
            _ => {
                warnings.push(Warning::new(
                    WarningKind::MissingAttributeValue,
                    format!("attribute {name} has `=` but no value"),
                    Span::new(base + attr_start, base + scanner.position()),
                ));
                ("", None)
            }
        };

        AttributeScan::Parsed(Attribute {
            name: name.to_string(),
            value: value.to_string(),
            namespace_uri: None,
            span: Span::new(base + attr_start, base + scanner.position()),
            value_span,
        })
    }
}

impl TokenParser for StartTagParser {
    fn name(&self) -> &'static str {
        "start-tag"
    }

    fn test(&self, input: &str) -> bool {
        starts_tag(input, "<")
    }

    fn parse(&self, input: &str, tokenizer: &mut Tokenizer<'_>) {
        let base = tokenizer.position();
        let mut scanner = Scanner::new(input);
        let _ = scanner.consume_string("<");
        let Some(name) = consume_qualified_name(&mut scanner) else {
            return;
        };

        let mut attributes: Vec<Attribute> = Vec::new();
        let mut warnings = Vec::new();
        let self_closing = loop {
            scanner.skip_whitespace();
            match scanner.peek() {
                None | Some('<') => {
                    tokenizer.warn(
                        WarningKind::UnterminatedTag,
                        format!("unterminated start tag <{}>", name.name),
                        Span::new(base, base + scanner.position()),
                    );
                    return;
                }
                Some('>') => {
                    let _ = scanner.consume();
                    break false;
                }
                Some('/') if scanner.next_few_characters_are("/>") => {
                    let _ = scanner.consume_string("/>");
                    break true;
                }
                Some(c) if is_attribute_name_char(c) => {
                    match Self::scan_attribute(&mut scanner, base, &mut warnings) {
                        AttributeScan::Parsed(attribute) => {
                            if attributes.iter().any(|seen| seen.is_named(&attribute.name)) {
                                warnings.push(Warning::new(
                                    WarningKind::DuplicateAttribute,
                                    format!("duplicate attribute {} dropped", attribute.name),
                                    attribute.span,
                                ));
                            } else {
                                attributes.push(attribute);
                            }
                        }
                        AttributeScan::UnclosedQuote { quote_at } => {
                            // The value runs to the end of input, so nothing
                            // after the quote can be markup for this tag.
                            tokenizer.warn(
                                WarningKind::UnclosedQuote,
                                format!("unclosed quote in start tag <{}>", name.name),
                                Span::new(base + quote_at, base + input.len()),
                            );
                            let token = Token::Text(Text {
                                span: Span::new(base, base + input.len()),
                                content: input.to_string(),
                            });
                            produce(tokenizer, input.len(), token);
                            return;
                        }
                    }
                }
                Some(c) => {
                    let at = scanner.position();
                    let _ = scanner.consume();
                    warnings.push(Warning::new(
                        WarningKind::UnexpectedCharacter,
                        format!("unexpected {c:?} in start tag <{}>", name.name),
                        Span::new(base + at, base + scanner.position()),
                    ));
                }
            }
        };

        let attribute_namespaces: Vec<Option<String>> = attributes
            .iter()
            .map(|attr| {
                let (prefix, _) = split_qualified_name(&attr.name);
                attribute_namespace(prefix, &attr.name, &attributes)
            })
            .collect();
        for (attr, namespace_uri) in attributes.iter_mut().zip(attribute_namespaces) {
            attr.namespace_uri = namespace_uri;
        }
        let namespace_uri = element_namespace(name.prefix, name.local_name, &attributes);
        let void = name.prefix.is_none()
            && TagName::from_name(name.local_name).is_some_and(TagName::is_void);

        for warning in warnings {
            tokenizer.warn(warning.kind, warning.message, warning.span);
        }
        let token = Token::StartTag(StartTag {
            span: Span::new(base, base + scanner.position()),
            name: name.name.to_string(),
            prefix: name.prefix.map(str::to_string),
            local_name: name.local_name.to_string(),
            namespace_uri,
            attributes,
            self_closing,
            void,
        });
        produce(tokenizer, scanner.position(), token);
    }
}
