//! Attribute classification.
//!
//! [§ Index: Attributes](https://html.spec.whatwg.org/multipage/indices.html#attributes-3)
//!
//! Two tiers:
//! - **Global attributes** are valid on every HTML element: the
//!   [§ 3.2.6 global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes),
//!   `class`, `id` and `slot` from DOM, event handler content attributes,
//!   `role` and the ARIA attributes, and every custom data attribute.
//! - **Local attributes** are valid only on the elements that list them in
//!   the index.
//!
//! All comparisons are ASCII case-insensitive and match whole names only.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;

use super::aria::ARIA_ATTRIBUTES;
use super::elements::TagName;
use super::lowercase;

/// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes),
/// plus `class`, `id`, and `slot` from the DOM Standard and `role` from
/// WAI-ARIA.
pub const GLOBAL_ATTRIBUTES: &[&str] = &[
    "accesskey",
    "autocapitalize",
    "autocorrect",
    "autofocus",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "enterkeyhint",
    "hidden",
    "id",
    "inert",
    "inputmode",
    "is",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope",
    "itemtype",
    "lang",
    "nonce",
    "popover",
    "role",
    "slot",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
    "writingsuggestions",
];

/// [§ 8.1.8.2 Event handlers on elements, Document objects, and Window objects](https://html.spec.whatwg.org/multipage/webappapis.html#event-handlers-on-elements,-document-objects,-and-window-objects)
///
/// Content attributes of `GlobalEventHandlers`, valid on every HTML element.
pub const EVENT_HANDLER_ATTRIBUTES: &[&str] = &[
    "onabort",
    "onauxclick",
    "onbeforeinput",
    "onbeforematch",
    "onbeforetoggle",
    "onblur",
    "oncancel",
    "oncanplay",
    "oncanplaythrough",
    "onchange",
    "onclick",
    "onclose",
    "oncontextlost",
    "oncontextmenu",
    "oncontextrestored",
    "oncopy",
    "oncuechange",
    "oncut",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "ondurationchange",
    "onemptied",
    "onended",
    "onerror",
    "onfocus",
    "onformdata",
    "oninput",
    "oninvalid",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onloadeddata",
    "onloadedmetadata",
    "onloadstart",
    "onmousedown",
    "onmouseenter",
    "onmouseleave",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onpaste",
    "onpause",
    "onplay",
    "onplaying",
    "onprogress",
    "onratechange",
    "onreset",
    "onresize",
    "onscroll",
    "onscrollend",
    "onsecuritypolicyviolation",
    "onseeked",
    "onseeking",
    "onselect",
    "onslotchange",
    "onstalled",
    "onsubmit",
    "onsuspend",
    "ontimeupdate",
    "ontoggle",
    "onvolumechange",
    "onwaiting",
    "onwheel",
];

static GLOBAL: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    GLOBAL_ATTRIBUTES
        .iter()
        .chain(EVENT_HANDLER_ATTRIBUTES)
        .chain(ARIA_ATTRIBUTES)
        .copied()
        .collect()
});

/// [§ 3.2.6.6 Embedding custom non-visible data with the data-* attributes](https://html.spec.whatwg.org/multipage/dom.html#embedding-custom-non-visible-data-with-the-data-*-attributes)
///
/// Any name starting with "data-", ASCII case-insensitive. The bare prefix
/// counts too, so every `data-` name is accepted on every element.
#[must_use]
pub fn is_custom_data_attribute(name: &str) -> bool {
    name.get(.."data-".len())
        .is_some_and(|head| head.eq_ignore_ascii_case("data-"))
}

/// Returns true if `name` is valid on every HTML element.
#[must_use]
pub fn is_global_attribute(name: &str) -> bool {
    is_custom_data_attribute(name) || GLOBAL.contains(lowercase(name).as_ref())
}

/// The attributes `tag` accepts on top of the global ones, lowercase.
///
/// Elements the index lists no attributes for return an empty slice.
#[must_use]
pub const fn local_attributes(tag: TagName) -> &'static [&'static str] {
    match tag {
        TagName::A => &[
            "download",
            "href",
            "hreflang",
            "ping",
            "referrerpolicy",
            "rel",
            "target",
            "type",
        ],
        TagName::Area => &[
            "alt",
            "coords",
            "download",
            "href",
            "ping",
            "referrerpolicy",
            "rel",
            "shape",
            "target",
        ],
        TagName::Audio => &[
            "autoplay",
            "controls",
            "crossorigin",
            "loop",
            "muted",
            "preload",
            "src",
        ],
        TagName::Base => &["href", "target"],
        TagName::Blockquote | TagName::Q => &["cite"],
        TagName::Body => &[
            "onafterprint",
            "onbeforeprint",
            "onbeforeunload",
            "onhashchange",
            "onlanguagechange",
            "onmessage",
            "onmessageerror",
            "onoffline",
            "ononline",
            "onpagehide",
            "onpagereveal",
            "onpageshow",
            "onpageswap",
            "onpopstate",
            "onrejectionhandled",
            "onstorage",
            "onunhandledrejection",
            "onunload",
        ],
        TagName::Button => &[
            "command",
            "commandfor",
            "disabled",
            "form",
            "formaction",
            "formenctype",
            "formmethod",
            "formnovalidate",
            "formtarget",
            "name",
            "popovertarget",
            "popovertargetaction",
            "type",
            "value",
        ],
        TagName::Canvas => &["height", "width"],
        TagName::Col | TagName::Colgroup => &["span"],
        TagName::Data | TagName::Li => &["value"],
        TagName::Del | TagName::Ins => &["cite", "datetime"],
        TagName::Details => &["name", "open"],
        TagName::Dialog => &["open"],
        TagName::Embed => &["height", "src", "type", "width"],
        TagName::Fieldset => &["disabled", "form", "name"],
        TagName::Form => &[
            "accept-charset",
            "action",
            "autocomplete",
            "enctype",
            "method",
            "name",
            "novalidate",
            "rel",
            "target",
        ],
        TagName::Iframe => &[
            "allow",
            "allowfullscreen",
            "height",
            "loading",
            "name",
            "referrerpolicy",
            "sandbox",
            "src",
            "srcdoc",
            "width",
        ],
        TagName::Img => &[
            "alt",
            "crossorigin",
            "decoding",
            "fetchpriority",
            "height",
            "ismap",
            "loading",
            "referrerpolicy",
            "sizes",
            "src",
            "srcset",
            "usemap",
            "width",
        ],
        TagName::Input => &[
            "accept",
            "alpha",
            "alt",
            "autocomplete",
            "checked",
            "colorspace",
            "dirname",
            "disabled",
            "form",
            "formaction",
            "formenctype",
            "formmethod",
            "formnovalidate",
            "formtarget",
            "height",
            "list",
            "max",
            "maxlength",
            "min",
            "minlength",
            "multiple",
            "name",
            "pattern",
            "placeholder",
            "popovertarget",
            "popovertargetaction",
            "readonly",
            "required",
            "size",
            "src",
            "step",
            "type",
            "value",
            "width",
        ],
        TagName::Label => &["for"],
        TagName::Link => &[
            "as",
            "blocking",
            "color",
            "crossorigin",
            "disabled",
            "fetchpriority",
            "href",
            "hreflang",
            "imagesizes",
            "imagesrcset",
            "integrity",
            "media",
            "referrerpolicy",
            "rel",
            "sizes",
            "type",
        ],
        TagName::Map | TagName::Slot => &["name"],
        TagName::Meta => &["charset", "content", "http-equiv", "media", "name"],
        TagName::Meter => &["high", "low", "max", "min", "optimum", "value"],
        TagName::Object => &["data", "form", "height", "name", "type", "width"],
        TagName::Ol => &["reversed", "start", "type"],
        TagName::Optgroup => &["disabled", "label"],
        TagName::Option => &["disabled", "label", "selected", "value"],
        TagName::Output => &["for", "form", "name"],
        TagName::Progress => &["max", "value"],
        TagName::Script => &[
            "async",
            "blocking",
            "crossorigin",
            "defer",
            "fetchpriority",
            "integrity",
            "nomodule",
            "referrerpolicy",
            "src",
            "type",
        ],
        TagName::Select => &[
            "autocomplete",
            "disabled",
            "form",
            "multiple",
            "name",
            "required",
            "size",
        ],
        TagName::Source => &[
            "height", "media", "sizes", "src", "srcset", "type", "width",
        ],
        TagName::Style => &["blocking", "media"],
        TagName::Td => &["colspan", "headers", "rowspan"],
        TagName::Template => &[
            "shadowrootclonable",
            "shadowrootcustomelementregistry",
            "shadowrootdelegatesfocus",
            "shadowrootmode",
            "shadowrootserializable",
        ],
        TagName::Textarea => &[
            "autocomplete",
            "cols",
            "dirname",
            "disabled",
            "form",
            "maxlength",
            "minlength",
            "name",
            "placeholder",
            "readonly",
            "required",
            "rows",
            "wrap",
        ],
        TagName::Th => &["abbr", "colspan", "headers", "rowspan", "scope"],
        TagName::Time => &["datetime"],
        TagName::Track => &["default", "kind", "label", "src", "srclang"],
        TagName::Video => &[
            "autoplay",
            "controls",
            "crossorigin",
            "height",
            "loop",
            "muted",
            "playsinline",
            "poster",
            "preload",
            "src",
            "width",
        ],
        _ => &[],
    }
}

/// Returns true if `name` is one of the attributes specific to `tag_name`.
///
/// Unknown tag names have no local attributes.
#[must_use]
pub fn is_local_attribute(tag_name: &str, name: &str) -> bool {
    TagName::from_name(tag_name).is_some_and(|tag| is_local_attribute_of(tag, name))
}

/// [`is_local_attribute`] for an already resolved [`TagName`].
#[must_use]
pub fn is_local_attribute_of(tag: TagName, name: &str) -> bool {
    local_attributes(tag)
        .iter()
        .any(|local| local.eq_ignore_ascii_case(name))
}

/// Returns true if `name` is allowed on `tag_name`: either local to it or
/// global.
#[must_use]
pub fn is_valid_attribute(tag_name: &str, name: &str) -> bool {
    is_local_attribute(tag_name, name) || is_global_attribute(name)
}

/// [§ 1.10.3 Restrictions on content models and on attribute values](https://html.spec.whatwg.org/multipage/introduction.html#restrictions-on-content-models-and-on-attribute-values)
///
/// Names starting with `x-`, or with exactly one underscore, are left to
/// author tooling and never get a meaning from the standard.
#[must_use]
pub fn is_reserved_attribute(name: &str) -> bool {
    let x_prefixed = name
        .get(..2)
        .is_some_and(|head| head.eq_ignore_ascii_case("x-"));
    x_prefixed || name.matches('_').count() == 1
}

/// Returns true if `name` cannot be written back into markup as an attribute
/// name: it contains `>`, `/`, `=`, a quote, or ASCII whitespace.
#[must_use]
pub fn is_unsafe_attribute_name(name: &str) -> bool {
    name.contains(['>', '/', '=', '"', '\'', '\t', '\n', '\x0C', ' '])
}

// =============================================================================
// Values
// =============================================================================

/// An attribute value read as the scalar it most likely denotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// A boolean attribute that is present.
    Bool(bool),
    /// A value with a leading decimal number, e.g. `3`, `-1.5`, `12px`.
    Number(f64),
    /// Anything else.
    Text(String),
}

/// Interpret an attribute value.
///
/// - an empty value, or one equal to the name (`disabled="disabled"`), is
///   `Bool(true)`
/// - a value starting with a decimal number is that `Number`; trailing text
///   such as a unit is ignored
/// - anything else is `Text`
#[must_use]
pub fn scalar_value(name: &str, value: &str) -> ScalarValue {
    if value.is_empty() || value.eq_ignore_ascii_case(name) {
        return ScalarValue::Bool(true);
    }
    number_prefix(value).map_or_else(|| ScalarValue::Text(value.to_string()), ScalarValue::Number)
}

/// Longest leading `[+-]?digits[.digits][e[+-]digits]` of `value`, after
/// leading whitespace.
fn number_prefix(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_end = digits_from(end);
    let mut has_digits = integer_end > end;
    end = integer_end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        if fraction_end > end + 1 {
            has_digits = true;
            end = fraction_end;
        } else if has_digits {
            end += 1;
        }
    }
    if !has_digits {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_end = digits_from(end + 1 + sign);
        if exponent_end > end + 1 + sign {
            end = exponent_end;
        }
    }
    value[..end].parse().ok()
}

// =============================================================================
// Reflected properties
// =============================================================================

/// DOM property names whose content attribute is spelled differently.
const PROPERTY_ATTRIBUTES: &[(&str, &str)] = &[
    ("acceptCharset", "accept-charset"),
    ("className", "class"),
    ("defaultChecked", "checked"),
    ("defaultSelected", "selected"),
    ("defaultValue", "value"),
    ("htmlFor", "for"),
    ("httpEquiv", "http-equiv"),
];

/// Content attribute reflected by a DOM property, e.g. `className` → `class`.
///
/// Properties spelled like their attribute are returned unchanged.
#[must_use]
pub fn property_to_attribute(property: &str) -> Cow<'_, str> {
    PROPERTY_ATTRIBUTES
        .iter()
        .find(|(prop, _)| *prop == property)
        .map_or(Cow::Borrowed(property), |(_, attr)| Cow::Borrowed(*attr))
}

/// DOM property reflecting a content attribute, e.g. `for` → `htmlFor`.
///
/// The attribute name is matched ignoring ASCII case; attributes spelled
/// like their property are returned lowercased.
#[must_use]
pub fn attribute_to_property(attribute: &str) -> Cow<'_, str> {
    PROPERTY_ATTRIBUTES
        .iter()
        .find(|(_, attr)| attr.eq_ignore_ascii_case(attribute))
        .map_or_else(|| lowercase(attribute), |(prop, _)| Cow::Borrowed(*prop))
}
