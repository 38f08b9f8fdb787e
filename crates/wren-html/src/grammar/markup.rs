//! Delimited markup constructs.
//!
//! All four rules share one recovery: when the closing delimiter never
//! appears, the construct runs to the end of the input and a warning is
//! raised. This mirrors the "eof-in-comment" / "eof-in-cdata" handling of
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! and keeps each rule linear in the input it reads.

use super::TokenParser;
use super::helpers::{Scanner, is_whitespace_char, produce};
use crate::error::WarningKind;
use crate::tokenizer::{
    CData, Comment, Declaration, ProcessingInstruction, Span, Token, Tokenizer,
};

/// Body of a delimited construct.
struct Delimited<'a> {
    body: &'a str,
    /// Bytes consumed including both delimiters.
    len: usize,
    terminated: bool,
}

fn delimited<'a>(input: &'a str, open: &str, close: &str) -> Delimited<'a> {
    let mut scanner = Scanner::new(input);
    let _ = scanner.consume_string(open);
    if let Some(body) = scanner.consume_until(close) {
        return Delimited {
            body,
            len: scanner.position(),
            terminated: true,
        };
    }
    let body = scanner.rest();
    scanner.skip_to_end();
    Delimited {
        body,
        len: scanner.position(),
        terminated: false,
    }
}

/// Recognize `open ... close` at the start of `input` and warn if `close`
/// is missing. Returns the body and the span of the whole construct.
fn recognize<'a>(
    input: &'a str,
    open: &str,
    close: &str,
    tokenizer: &mut Tokenizer<'_>,
    kind: WarningKind,
    what: &str,
) -> (&'a str, Span) {
    let start = tokenizer.position();
    let found = delimited(input, open, close);
    let span = Span::new(start, start + found.len);
    if !found.terminated {
        tokenizer.warn(
            kind,
            format!("unterminated {what}: expected `{close}` before end of input"),
            span,
        );
    }
    (found.body, span)
}

/// [§ 2.6 Processing Instructions](https://www.w3.org/TR/xml/#sec-pi)
///
/// `<?target data?>`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessingInstructionParser;

impl TokenParser for ProcessingInstructionParser {
    fn name(&self) -> &'static str {
        "processing-instruction"
    }

    fn test(&self, input: &str) -> bool {
        input.starts_with("<?")
    }

    fn parse(&self, input: &str, tokenizer: &mut Tokenizer<'_>) {
        let (body, span) = recognize(
            input,
            "<?",
            "?>",
            tokenizer,
            WarningKind::UnterminatedProcessingInstruction,
            "processing instruction",
        );
        let (target, data) = body
            .split_once(is_whitespace_char)
            .map_or((body, ""), |(target, data)| {
                (target, data.trim_start_matches(is_whitespace_char))
            });
        let token = Token::ProcessingInstruction(ProcessingInstruction {
            span,
            target: target.to_string(),
            data: data.to_string(),
        });
        produce(tokenizer, span.len(), token);
    }
}

/// [§ 13.1.1 The DOCTYPE](https://html.spec.whatwg.org/multipage/syntax.html#the-doctype)
/// and other `<!KEYWORD ...>` markup declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationParser;

impl TokenParser for DeclarationParser {
    fn name(&self) -> &'static str {
        "declaration"
    }

    fn test(&self, input: &str) -> bool {
        input
            .strip_prefix("<!")
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_alphabetic())
    }

    fn parse(&self, input: &str, tokenizer: &mut Tokenizer<'_>) {
        let (body, span) = recognize(
            input,
            "<!",
            ">",
            tokenizer,
            WarningKind::UnterminatedDeclaration,
            "declaration",
        );
        let keyword_len = body
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(body.len());
        let token = Token::Declaration(Declaration {
            span,
            keyword: body[..keyword_len].to_string(),
            data: body.to_string(),
        });
        produce(tokenizer, span.len(), token);
    }
}

/// [§ 13.1.6 Comments](https://html.spec.whatwg.org/multipage/syntax.html#comments)
///
/// `<!-- data -->`
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentParser;

impl TokenParser for CommentParser {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn test(&self, input: &str) -> bool {
        input.starts_with("<!--")
    }

    fn parse(&self, input: &str, tokenizer: &mut Tokenizer<'_>) {
        // "abrupt-closing-of-empty-comment": `<!-->` and `<!--->` are empty
        // comments, not the start of one running to `-->`.
        if let Some(len) = ["<!-->", "<!--->"]
            .into_iter()
            .find(|abrupt| input.starts_with(*abrupt))
            .map(str::len)
        {
            let start = tokenizer.position();
            let span = Span::new(start, start + len);
            tokenizer.warn(
                WarningKind::AbruptClosingOfEmptyComment,
                "comment closed by `>` right after its opening `<!--`",
                span,
            );
            let token = Token::Comment(Comment {
                span,
                data: String::new(),
            });
            produce(tokenizer, len, token);
            return;
        }
        let (data, span) = recognize(
            input,
            "<!--",
            "-->",
            tokenizer,
            WarningKind::UnterminatedComment,
            "comment",
        );
        let token = Token::Comment(Comment {
            span,
            data: data.to_string(),
        });
        produce(tokenizer, span.len(), token);
    }
}

/// [§ 13.1.5 CDATA sections](https://html.spec.whatwg.org/multipage/syntax.html#cdata-sections)
///
/// `<![CDATA[ data ]]>`
#[derive(Debug, Clone, Copy, Default)]
pub struct CDataSectionParser;

impl TokenParser for CDataSectionParser {
    fn name(&self) -> &'static str {
        "cdata"
    }

    fn test(&self, input: &str) -> bool {
        input.starts_with("<![CDATA[")
    }

    fn parse(&self, input: &str, tokenizer: &mut Tokenizer<'_>) {
        let (data, span) = recognize(
            input,
            "<![CDATA[",
            "]]>",
            tokenizer,
            WarningKind::UnterminatedCData,
            "CDATA section",
        );
        let token = Token::CData(CData {
            span,
            data: data.to_string(),
        });
        produce(tokenizer, span.len(), token);
    }
}
