//! Grammar rules and the ordered rule sets that drive the tokenizer.
//!
//! A [`Grammar`] is the tokenizer's configuration: an immutable list of
//! [`TokenParser`]s tried in order at every position. The built-in HTML
//! grammar uses this priority:
//!
//! 1. processing instruction `<?...?>`
//! 2. declaration `<!DOCTYPE ...>`
//! 3. comment `<!--...-->`
//! 4. CDATA section `<![CDATA[...]]>`
//! 5. end tag `</name>`
//! 6. start tag `<name attr=value>`
//! 7. text (fallback)
//!
//! The fallback rule accepts any non-empty input, so a pass over the grammar
//! always makes progress.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::tokenizer::Tokenizer;

/// Helper functions shared by the rules.
pub(crate) mod helpers;
/// Rules for `<?`, `<!`, `<!--`, and `<![CDATA[` constructs.
pub mod markup;
/// Rules for start and end tags.
pub mod tag;
/// The text fallback rule.
pub mod text;

pub use markup::{CDataSectionParser, CommentParser, DeclarationParser, ProcessingInstructionParser};
pub use tag::{EndTagParser, StartTagParser};
pub use text::TextParser;

/// A matcher and producer for one kind of token.
///
/// Rules are shared between tokenizers (and threads) through [`Grammar`], so
/// they hold no per-run state.
pub trait TokenParser: Send + Sync {
    /// Name used in diagnostics and to address the rule in a
    /// [`GrammarBuilder`].
    fn name(&self) -> &'static str;

    /// Cheap lookahead: whether [`TokenParser::parse`] could match `input`.
    ///
    /// Must not have side effects.
    fn test(&self, input: &str) -> bool;

    /// Try to recognize a token at the start of `input`, the unconsumed
    /// suffix of the tokenizer's source.
    ///
    /// On a match the rule advances the tokenizer by the matched length
    /// (at least one byte) and emits the token. Otherwise it leaves the
    /// tokenizer untouched apart from warnings, and the next rule is tried.
    fn parse(&self, input: &str, tokenizer: &mut Tokenizer<'_>);
}

static HTML_GRAMMAR: LazyLock<Arc<Grammar>> = LazyLock::new(|| Arc::new(Grammar::html()));

/// An ordered, immutable set of grammar rules.
pub struct Grammar {
    rules: Vec<Box<dyn TokenParser>>,
}

impl Grammar {
    /// The built-in HTML rule set.
    #[must_use]
    pub fn html() -> Self {
        Self::builder().build()
    }

    /// The built-in HTML rule set, built once and shared process-wide.
    #[must_use]
    pub fn html_shared() -> Arc<Self> {
        Arc::clone(&HTML_GRAMMAR)
    }

    /// A builder starting from the built-in HTML rules.
    #[must_use]
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
            .rule(ProcessingInstructionParser)
            .rule(DeclarationParser)
            .rule(CommentParser)
            .rule(CDataSectionParser)
            .rule(EndTagParser)
            .rule(StartTagParser)
    }

    /// The rules in the order they are tried.
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn TokenParser>] {
        &self.rules
    }

    /// Rule names in the order they are tried.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Number of rules, including the fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the grammar has no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::html()
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rule_names()).finish()
    }
}

/// Builds a [`Grammar`] from rules, keeping a fallback rule last.
///
/// Rules are addressed by [`TokenParser::name`]. Operations naming a rule
/// that is not present leave the builder unchanged, except
/// [`GrammarBuilder::before`], which appends.
pub struct GrammarBuilder {
    rules: Vec<Box<dyn TokenParser>>,
    fallback: Option<Box<dyn TokenParser>>,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    /// An empty builder with [`TextParser`] as the fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Some(Box::new(TextParser)),
        }
    }

    /// Append a rule (before the fallback).
    #[must_use]
    pub fn rule(mut self, rule: impl TokenParser + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Insert a rule right before the rule called `name`.
    #[must_use]
    pub fn before(mut self, name: &str, rule: impl TokenParser + 'static) -> Self {
        let index = self.position(name).unwrap_or(self.rules.len());
        self.rules.insert(index, Box::new(rule));
        self
    }

    /// Put a rule in place of the rule called `name`.
    #[must_use]
    pub fn replace(mut self, name: &str, rule: impl TokenParser + 'static) -> Self {
        if let Some(index) = self.position(name) {
            self.rules[index] = Box::new(rule);
        }
        self
    }

    /// Remove the rule called `name`.
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.rules.retain(|rule| rule.name() != name);
        self
    }

    /// Use another fallback rule instead of [`TextParser`].
    ///
    /// The fallback is always tried last and should accept any non-empty
    /// input.
    #[must_use]
    pub fn fallback(mut self, rule: impl TokenParser + 'static) -> Self {
        self.fallback = Some(Box::new(rule));
        self
    }

    /// Drop the fallback rule.
    ///
    /// The remaining rules must then guarantee progress on every input;
    /// otherwise the tokenizer stops with
    /// [`TokenizerError::NoProgress`](crate::TokenizerError::NoProgress).
    #[must_use]
    pub fn no_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.name() == name)
    }

    /// Finish the grammar.
    #[must_use]
    pub fn build(self) -> Grammar {
        let mut rules = self.rules;
        rules.extend(self.fallback);
        Grammar { rules }
    }
}
