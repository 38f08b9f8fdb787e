use crate::error::{Warning, WarningKind};
use crate::syntax::namespace::ns;
use crate::syntax::{TagName, is_global_attribute, is_local_attribute_of};
use crate::tokenizer::{Dispatch, Hook, Plugin, StartTag, Token};

/// Warns about attributes that are neither global nor allowed on their
/// element.
///
/// Only HTML elements the tables know are checked. Custom elements, foreign
/// (SVG, `MathML`) elements, and namespaced attributes are left alone, since
/// the tables say nothing about them. The token itself is never changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeValidator;

impl AttributeValidator {
    /// Warnings for the invalid attributes of `tag`.
    #[must_use]
    pub fn check(tag: &StartTag) -> Vec<Warning> {
        if tag.namespace_uri.as_deref().is_some_and(|uri| uri != ns::HTML) {
            return Vec::new();
        }
        let Some(element) = TagName::from_name(&tag.local_name) else {
            return Vec::new();
        };
        tag.attributes
            .iter()
            .filter(|attr| attr.namespace_uri.is_none() && !attr.name.contains(':'))
            .filter(|attr| {
                !is_local_attribute_of(element, &attr.name) && !is_global_attribute(&attr.name)
            })
            .map(|attr| {
                Warning::new(
                    WarningKind::InvalidAttribute,
                    format!("attribute {} is not allowed on <{element}>", attr.name),
                    attr.span,
                )
            })
            .collect()
    }
}

impl Plugin for AttributeValidator {
    fn supports(&self, hook: &Hook) -> bool {
        *hook == Hook::START_TAG
    }

    fn on_token(&mut self, cycle: &mut Dispatch<'_>) {
        let Some(Token::StartTag(tag)) = cycle.token() else {
            return;
        };
        for warning in Self::check(tag) {
            cycle.warn(warning.kind, warning.message, warning.span);
        }
    }
}
