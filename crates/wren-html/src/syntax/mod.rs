//! Static HTML syntax tables.
//!
//! Everything here is read-only data built at most once per process, so it
//! can be shared freely between tokenizers and threads.

use std::borrow::Cow;

/// WAI-ARIA state and property attributes.
pub mod aria;
/// Global and per-element attribute tables.
pub mod attributes;
/// HTML element names.
pub mod elements;
/// Namespace URIs and prefix resolution.
pub mod namespace;

pub use aria::{ARIA_ATTRIBUTES, is_aria_attribute};
pub use attributes::{
    EVENT_HANDLER_ATTRIBUTES, GLOBAL_ATTRIBUTES, ScalarValue, attribute_to_property,
    is_custom_data_attribute, is_global_attribute, is_local_attribute, is_local_attribute_of,
    is_reserved_attribute, is_unsafe_attribute_name, is_valid_attribute, local_attributes,
    property_to_attribute, scalar_value,
};
pub use elements::{TagName, is_known_element, is_void_element};

/// ASCII-lowercase `name`, borrowing when it already is.
pub(crate) fn lowercase(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}
