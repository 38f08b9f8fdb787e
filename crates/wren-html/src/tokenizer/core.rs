use std::cell::OnceCell;
use std::iter::FusedIterator;
use std::sync::Arc;

use super::location::{LineIndex, SourceCodeLocation};
use super::plugin::{Dispatch, Hook, Plugin, next_char_boundary};
use super::token::{Span, Token};
use crate::error::{TokenizerError, Warning, WarningKind};
use crate::grammar::Grammar;

/// Drives grammar rules over a source string and dispatches tokens to plugins.
///
/// One instance handles one run at a time: [`Tokenizer::start`] installs a
/// source, [`Tokenizer::tokens`] pulls tokens lazily, and the `end` hooks fire
/// once the sequence is exhausted. [`Tokenizer::reset`] or another `start`
/// begins a fresh run.
///
/// Grammar rules are tried in order against the unconsumed input. The first
/// rule to establish a current token wins; the token is produced and the next
/// pull starts again from the first rule.
pub struct Tokenizer<'p> {
    grammar: Arc<Grammar>,
    plugins: Vec<Box<dyn Plugin + 'p>>,
    source: Option<Arc<str>>,
    cursor_position: usize,
    // None means "before the first rule"; the next attempt uses rule 0.
    token_parser_index: Option<usize>,
    current_token: Option<Token>,
    ended: bool,
    line_index: OnceCell<LineIndex>,
}

impl Default for Tokenizer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> Tokenizer<'p> {
    /// Create a tokenizer with the default HTML grammar and no plugins.
    #[must_use]
    pub fn new() -> Self {
        Self::with_grammar(Grammar::html_shared())
    }

    /// Create a tokenizer with a custom grammar and no plugins.
    ///
    /// Grammars are immutable, so one `Arc<Grammar>` can back any number of
    /// tokenizers, including on other threads.
    #[must_use]
    pub fn with_grammar(grammar: impl Into<Arc<Grammar>>) -> Self {
        Self {
            grammar: grammar.into(),
            plugins: Vec::new(),
            source: None,
            cursor_position: 0,
            token_parser_index: None,
            current_token: None,
            ended: false,
            line_index: OnceCell::new(),
        }
    }

    /// Register a plugin after the ones already registered (builder form).
    #[must_use]
    pub fn plugin(mut self, plugin: impl Plugin + 'p) -> Self {
        self.register(plugin);
        self
    }

    /// Register a plugin after the ones already registered.
    pub fn register(&mut self, plugin: impl Plugin + 'p) {
        self.plugins.push(Box::new(plugin));
    }

    /// The grammar this tokenizer runs.
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Clear the source, cursor, and rule index. Plugins are not notified.
    pub fn reset(&mut self) {
        self.source = None;
        self.cursor_position = 0;
        self.token_parser_index = None;
        self.current_token = None;
        self.ended = false;
        self.line_index = OnceCell::new();
    }

    /// Begin a run on `source` and call every plugin's `start` hook in
    /// registration order.
    pub fn start(&mut self, source: impl Into<Arc<str>>) {
        self.reset();
        let source: Arc<str> = source.into();
        self.source = Some(Arc::clone(&source));
        for plugin in &mut self.plugins {
            // Some plugins can skip the start hook
            if plugin.supports(&Hook::START) {
                plugin.start(&source);
            }
        }
    }

    /// Call every plugin's `end` hook in registration order.
    ///
    /// Runs at most once per run; the token iterator calls it when the input
    /// is exhausted.
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        for plugin in &mut self.plugins {
            if plugin.supports(&Hook::END) {
                plugin.end();
            }
        }
    }

    /// The source of the current run, if one was started.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The input not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &str {
        self.source
            .as_deref()
            .map_or("", |source| &source[self.cursor_position..])
    }

    /// Byte offset of the cursor into the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor_position
    }

    /// Returns true once all input has been consumed.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.remaining().is_empty()
    }

    /// The token of the active dispatch cycle, if any.
    #[must_use]
    pub const fn current_token(&self) -> Option<&Token> {
        self.current_token.as_ref()
    }

    /// Consume `n` bytes of input and return the new cursor position.
    ///
    /// Grammar rules must not advance past the end of the input. The cursor is
    /// clamped to the end and kept on a character boundary regardless.
    pub fn advance(&mut self, n: usize) -> usize {
        let source = self.source.as_deref().unwrap_or("");
        debug_assert!(n <= source.len() - self.cursor_position);
        self.cursor_position = next_char_boundary(source, self.cursor_position + n);
        self.cursor_position
    }

    /// Substitute `token` for the token of the active dispatch cycle.
    pub fn replace_token(&mut self, token: Token) {
        self.current_token = Some(token);
    }

    /// Discard the current token and restart grammar rules at the cursor.
    pub fn skip_token(&mut self) {
        self.token_parser_index = None;
        self.current_token = None;
    }

    /// Line/column location of `span` in the current source.
    ///
    /// The line index is built on first use and reused for the rest of the
    /// run. Returns `None` before [`Tokenizer::start`].
    #[must_use]
    pub fn location(&self, span: Span) -> Option<SourceCodeLocation> {
        let source = self.source.as_deref()?;
        let index = self.line_index.get_or_init(|| LineIndex::new(source));
        Some(index.locate(source, span))
    }

    /// Broadcast a diagnostic to every plugin's `warn` hook in registration
    /// order.
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>, span: Span) {
        self.broadcast(Warning::new(kind, message, span));
    }

    fn broadcast(&mut self, mut warning: Warning) {
        if warning.location.is_none() {
            warning.location = self.location(warning.span);
        }
        for plugin in &mut self.plugins {
            // Some plugins can skip the warn hook
            if plugin.supports(&Hook::WARN) {
                plugin.warn(&warning);
            }
        }
    }

    /// Make `token` the current token and dispatch it on `hook`.
    ///
    /// Plugins supporting `hook` are called in registration order for as long
    /// as the token is still set. A plugin that skips the token ends the cycle.
    /// Warnings raised by plugins during the cycle are broadcast after it.
    pub fn emit(&mut self, hook: &Hook, token: Token) {
        self.current_token = Some(token);
        let mut warnings = Vec::new();
        let source = self.source.as_deref().unwrap_or("");
        for plugin in &mut self.plugins {
            // Some plugins can skip some hooks
            if !plugin.supports(hook) {
                continue;
            }
            // Some plugins can skip the current token
            if self.current_token.is_none() {
                break;
            }
            let mut cycle = Dispatch {
                hook,
                source,
                token: &mut self.current_token,
                cursor: &mut self.cursor_position,
                token_parser_index: &mut self.token_parser_index,
                warnings: &mut warnings,
            };
            plugin.on_token(&mut cycle);
        }
        for warning in warnings {
            self.broadcast(warning);
        }
    }

    /// [`Tokenizer::emit`] on the token's own hook.
    pub fn emit_token(&mut self, token: Token) {
        let hook = token.hook();
        self.emit(&hook, token);
    }

    /// The lazy token sequence of the current run.
    ///
    /// Each item is pulled on demand. The sequence ends when the input is
    /// exhausted (after calling the `end` hooks) or after the first error.
    pub fn tokens(&mut self) -> Tokens<'_, 'p> {
        Tokens {
            tokenizer: self,
            done: false,
        }
    }

    /// Produce the next token, or `None` at the end of the input.
    ///
    /// # Errors
    ///
    /// - [`TokenizerError::NotStarted`] if no source is installed.
    /// - [`TokenizerError::NoProgress`] if a full pass over the grammar
    ///   neither produced a token nor consumed input.
    /// - [`TokenizerError::EmptyToken`] if a rule produced a token without
    ///   consuming input.
    pub fn next_token(&mut self) -> Result<Option<Token>, TokenizerError> {
        let source = self.source.clone().ok_or(TokenizerError::NotStarted)?;
        let grammar = Arc::clone(&self.grammar);
        let rules = grammar.rules();
        let mut pass_start = None;
        self.token_parser_index = None;

        loop {
            let index = self.token_parser_index.map_or(0, |index| index + 1);
            if index == 0 {
                if self.is_eof() {
                    return Ok(None);
                }
                if pass_start == Some(self.cursor_position) {
                    return Err(TokenizerError::NoProgress {
                        position: self.cursor_position,
                    });
                }
                pass_start = Some(self.cursor_position);
            }

            let Some(rule) = rules.get(index) else {
                // Every rule was tried; start over from the first one
                self.token_parser_index = None;
                continue;
            };
            self.token_parser_index = Some(index);

            let before = self.cursor_position;
            let remaining = &source[before..];
            if rule.test(remaining) {
                rule.parse(remaining, self);
            }

            if let Some(token) = self.current_token.take() {
                if self.cursor_position == before {
                    return Err(TokenizerError::EmptyToken {
                        rule: rule.name(),
                        position: before,
                    });
                }
                self.token_parser_index = None;
                return Ok(Some(token));
            }
        }
    }

    /// Run `source` to completion and collect its tokens.
    ///
    /// # Errors
    ///
    /// Returns the first [`TokenizerError`] raised while pulling tokens.
    pub fn tokenize(&mut self, source: impl Into<Arc<str>>) -> Result<Vec<Token>, TokenizerError> {
        self.start(source);
        self.tokens().collect()
    }
}

/// Lazy token sequence returned by [`Tokenizer::tokens`].
pub struct Tokens<'t, 'p> {
    tokenizer: &'t mut Tokenizer<'p>,
    done: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, TokenizerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.tokenizer.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                self.tokenizer.end();
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}
