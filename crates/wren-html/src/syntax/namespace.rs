//! Namespace resolution for qualified tag and attribute names.
//!
//! There is no element stack here: a prefix resolves through `xmlns`
//! declarations on the same tag first, then through the well-known prefixes.

use crate::tokenizer::Attribute;

/// Well-known namespace URIs.
pub mod ns {
    /// [Infra § 8 Namespaces](https://infra.spec.whatwg.org/#html-namespace)
    pub const HTML: &str = "http://www.w3.org/1999/xhtml";
    /// [Infra § 8 Namespaces](https://infra.spec.whatwg.org/#svg-namespace)
    pub const SVG: &str = "http://www.w3.org/2000/svg";
    /// [Infra § 8 Namespaces](https://infra.spec.whatwg.org/#mathml-namespace)
    pub const MATHML: &str = "http://www.w3.org/1998/Math/MathML";
    /// [Infra § 8 Namespaces](https://infra.spec.whatwg.org/#xlink-namespace)
    pub const XLINK: &str = "http://www.w3.org/1999/xlink";
    /// [Infra § 8 Namespaces](https://infra.spec.whatwg.org/#xml-namespace)
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
    /// [Infra § 8 Namespaces](https://infra.spec.whatwg.org/#xmlns-namespace)
    pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";
}

/// Namespace bound to a well-known prefix, ignoring ASCII case.
#[must_use]
pub fn well_known_namespace(prefix: &str) -> Option<&'static str> {
    match prefix.to_ascii_lowercase().as_str() {
        "svg" => Some(ns::SVG),
        "math" => Some(ns::MATHML),
        "xlink" => Some(ns::XLINK),
        "xml" => Some(ns::XML),
        "xmlns" => Some(ns::XMLNS),
        _ => None,
    }
}

/// Namespace for the prefix of an attribute or element on a tag carrying
/// `attributes`.
///
/// A `xmlns:prefix` declaration on the tag wins over the well-known binding.
/// `prefix` of `None` looks for a default `xmlns` declaration instead.
#[must_use]
pub fn resolve_prefix(prefix: Option<&str>, attributes: &[Attribute]) -> Option<String> {
    let declared = attributes.iter().find(|attr| match prefix {
        Some(prefix) => attr
            .name
            .split_once(':')
            .is_some_and(|(head, tail)| head.eq_ignore_ascii_case("xmlns") && tail == prefix),
        None => attr.is_named("xmlns"),
    });
    if let Some(attr) = declared {
        return Some(attr.value.clone());
    }
    prefix.and_then(well_known_namespace).map(str::to_string)
}

/// Namespace of an element, from its qualified name and its own attributes.
///
/// Unprefixed `svg` and `math` start their foreign namespaces; any other
/// unprefixed element without a default declaration is HTML.
#[must_use]
pub fn element_namespace(
    prefix: Option<&str>,
    local_name: &str,
    attributes: &[Attribute],
) -> Option<String> {
    if prefix.is_some() {
        return resolve_prefix(prefix, attributes);
    }
    if let Some(uri) = resolve_prefix(None, attributes) {
        return Some(uri);
    }
    let uri = if local_name.eq_ignore_ascii_case("svg") {
        ns::SVG
    } else if local_name.eq_ignore_ascii_case("math") {
        ns::MATHML
    } else {
        ns::HTML
    };
    Some(uri.to_string())
}

/// Namespace of an attribute. Unprefixed attributes have none, except
/// `xmlns` itself.
#[must_use]
pub fn attribute_namespace(
    prefix: Option<&str>,
    name: &str,
    attributes: &[Attribute],
) -> Option<String> {
    match prefix {
        Some(prefix) if prefix.eq_ignore_ascii_case("xmlns") => Some(ns::XMLNS.to_string()),
        Some(_) => resolve_prefix(prefix, attributes),
        None if name.eq_ignore_ascii_case("xmlns") => Some(ns::XMLNS.to_string()),
        None => None,
    }
}
