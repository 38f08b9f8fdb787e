//! Integration tests for element and attribute classification.

use strum::IntoEnumIterator;
use wren_html::syntax::attributes::{
    ScalarValue, attribute_to_property, is_custom_data_attribute, is_reserved_attribute,
    is_unsafe_attribute_name, local_attributes, property_to_attribute, scalar_value,
};
use wren_html::syntax::{is_aria_attribute, is_known_element, is_void_element};
use wren_html::{TagName, is_global_attribute, is_local_attribute, is_valid_attribute};

#[test]
fn test_global_attributes() {
    for name in ["id", "class", "style", "title", "lang", "hidden", "tabindex", "slot"] {
        assert!(is_global_attribute(name), "{name} should be global");
    }
    assert!(is_global_attribute("ONCLICK"));
    assert!(is_global_attribute("role"));
    assert!(is_global_attribute("aria-hidden"));
    assert!(!is_global_attribute("aria-bogus"));
    assert!(!is_global_attribute("href"));
    // Whole names only
    assert!(!is_global_attribute("identity"));
    assert!(!is_global_attribute("xid"));
}

#[test]
fn test_custom_data_attributes() {
    assert!(is_custom_data_attribute("data-x"));
    assert!(is_custom_data_attribute("DATA-Foo-Bar"));
    // The bare prefix is still a data attribute
    assert!(is_custom_data_attribute("data-"));
    assert!(is_custom_data_attribute("Data-"));
    assert!(is_valid_attribute("div", "data-"));
    assert!(is_valid_attribute("no-such-tag", "DATA-"));
    assert!(!is_custom_data_attribute("data"));
    assert!(!is_custom_data_attribute("x-data-y"));
    assert!(is_global_attribute("data-anything"));
}

#[test]
fn test_local_attributes() {
    assert!(is_local_attribute("a", "href"));
    assert!(is_local_attribute("A", "HREF"));
    assert!(is_local_attribute("img", "srcset"));
    assert!(is_local_attribute("input", "placeholder"));
    assert!(is_local_attribute("td", "colspan"));
    assert!(is_local_attribute("body", "onbeforeunload"));
    assert!(!is_local_attribute("div", "href"));
    assert!(!is_local_attribute("span", "colspan"));
    assert!(!is_local_attribute("my-element", "href"));
    // Global attributes are not local
    assert!(!is_local_attribute("a", "class"));
}

#[test]
fn test_valid_attributes() {
    assert!(is_valid_attribute("a", "href"));
    assert!(is_valid_attribute("div", "class"));
    assert!(is_valid_attribute("custom-tag", "data-x"));
    assert!(!is_valid_attribute("div", "href"));
    assert!(!is_valid_attribute("custom-tag", "href"));
}

#[test]
fn test_local_tables_pinned() {
    assert_eq!(local_attributes(TagName::Base), ["href", "target"]);
    assert_eq!(local_attributes(TagName::Q), ["cite"]);
    assert_eq!(local_attributes(TagName::Blockquote), ["cite"]);
    assert_eq!(local_attributes(TagName::Col), ["span"]);
    assert_eq!(local_attributes(TagName::Li), ["value"]);
    assert_eq!(local_attributes(TagName::Label), ["for"]);
    assert_eq!(local_attributes(TagName::Time), ["datetime"]);
    assert_eq!(
        local_attributes(TagName::Th),
        ["abbr", "colspan", "headers", "rowspan", "scope"]
    );
    assert_eq!(
        local_attributes(TagName::Meta),
        ["charset", "content", "http-equiv", "media", "name"]
    );
    assert_eq!(
        local_attributes(TagName::Object),
        ["data", "form", "height", "name", "type", "width"]
    );
    assert!(local_attributes(TagName::Div).is_empty());
    assert!(local_attributes(TagName::Span).is_empty());
}

#[test]
fn test_local_tables_are_well_formed() {
    for tag in TagName::iter() {
        let table = local_attributes(tag);
        assert!(
            table.windows(2).all(|pair| pair[0] < pair[1]),
            "<{tag}> table should be sorted and unique"
        );
        for name in table {
            assert_eq!(*name, name.to_ascii_lowercase(), "<{tag}> {name}");
            assert!(!is_global_attribute(name), "<{tag}> {name} is also global");
        }
    }
}

#[test]
fn test_aria_attributes() {
    assert!(is_aria_attribute("aria-label"));
    assert!(is_aria_attribute("ARIA-LABELLEDBY"));
    assert!(is_aria_attribute("role"));
    assert!(!is_aria_attribute("aria-"));
    assert!(!is_aria_attribute("aria-labelz"));
}

#[test]
fn test_elements() {
    assert_eq!(TagName::from_name("DIV"), Some(TagName::Div));
    assert_eq!(TagName::from_name("nope"), None);
    assert_eq!(TagName::Blockquote.to_string(), "blockquote");
    assert!(is_known_element("template"));
    assert!(!is_known_element("my-widget"));
    for name in [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
        "track", "wbr",
    ] {
        assert!(is_void_element(name), "{name} should be void");
    }
    assert!(!is_void_element("div"));
    assert!(!is_void_element("template"));
}

#[test]
fn test_reserved_and_unsafe_names() {
    assert!(is_reserved_attribute("x-foo"));
    assert!(is_reserved_attribute("X-Foo"));
    assert!(is_reserved_attribute("_private"));
    assert!(is_reserved_attribute("my_attr"));
    assert!(!is_reserved_attribute("my__attr"));
    assert!(!is_reserved_attribute("class"));

    assert!(is_unsafe_attribute_name("a b"));
    assert!(is_unsafe_attribute_name("a=b"));
    assert!(is_unsafe_attribute_name("a\"b"));
    assert!(is_unsafe_attribute_name("a/"));
    assert!(!is_unsafe_attribute_name("data-ok"));
}

#[test]
fn test_scalar_values() {
    assert_eq!(scalar_value("disabled", ""), ScalarValue::Bool(true));
    assert_eq!(scalar_value("disabled", "DISABLED"), ScalarValue::Bool(true));
    assert_eq!(scalar_value("width", "12"), ScalarValue::Number(12.0));
    assert_eq!(scalar_value("width", "12px"), ScalarValue::Number(12.0));
    assert_eq!(scalar_value("x", "-1.5e2"), ScalarValue::Number(-150.0));
    assert_eq!(scalar_value("x", ".5"), ScalarValue::Number(0.5));
    assert_eq!(scalar_value("x", "3."), ScalarValue::Number(3.0));
    assert_eq!(
        scalar_value("class", "intro"),
        ScalarValue::Text("intro".to_string())
    );
    assert_eq!(scalar_value("x", "-"), ScalarValue::Text("-".to_string()));
    assert_eq!(scalar_value("x", "e5"), ScalarValue::Text("e5".to_string()));
}

#[test]
fn test_property_names() {
    assert_eq!(property_to_attribute("className"), "class");
    assert_eq!(property_to_attribute("htmlFor"), "for");
    assert_eq!(property_to_attribute("title"), "title");
    assert_eq!(attribute_to_property("for"), "htmlFor");
    assert_eq!(attribute_to_property("HTTP-EQUIV"), "httpEquiv");
    assert_eq!(attribute_to_property("TITLE"), "title");
}
