//! Entity codec.
//!
//! Decoding follows the character reference states of
//! [§ 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state);
//! encoding replaces the five characters that are significant in markup.
//! Both return [`Cow`](std::borrow::Cow) and only allocate when something
//! changes.

/// Decoding named and numeric character references.
pub mod character_reference;
/// Escaping markup-significant characters.
pub mod escape;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;

pub use character_reference::{decode, decode_attribute, decode_attribute_with, decode_with};
pub use escape::encode;
pub use named_character_references::{entity_count, is_entity_name, lookup_entity};
