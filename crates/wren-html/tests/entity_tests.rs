//! Integration tests for character reference decoding and escaping.

use std::borrow::Cow;

use wren_html::entities::{
    decode_attribute_with, decode_with, entity_count, is_entity_name, lookup_entity,
};
use wren_html::{Span, WarningKind, decode, decode_attribute, encode};

/// Decode `input` as text and collect the warning kinds.
fn decode_logged(input: &str) -> (String, Vec<WarningKind>) {
    let mut kinds = Vec::new();
    let decoded = decode_with(input, |w| kinds.push(w.kind)).into_owned();
    (decoded, kinds)
}

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_entity("amp;"), Some("&"));
    assert_eq!(lookup_entity("lt;"), Some("<"));
    assert_eq!(lookup_entity("gt;"), Some(">"));
    assert_eq!(lookup_entity("quot;"), Some("\""));
    assert_eq!(lookup_entity("apos;"), Some("'"));
    assert_eq!(lookup_entity("nbsp;"), Some("\u{00A0}"));
    assert_eq!(lookup_entity("hellip;"), Some("\u{2026}"));
    assert_eq!(lookup_entity("bsol;"), Some("\\"));
}

#[test]
fn test_decode_backslash_reference() {
    assert_eq!(decode("&bsol;"), "\\");
    assert_eq!(decode("a&bsol;b&quot;"), "a\\b\"");
}

#[test]
fn test_lookup_legacy_entities() {
    // Legacy entities without semicolon
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("copy"), Some("\u{A9}"));
    assert_eq!(lookup_entity("AMP"), Some("&"));
    // Only the legacy set works without a semicolon
    assert_eq!(lookup_entity("hellip"), None);
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_entity("notarealentity;"), None);
    assert_eq!(lookup_entity(""), None);
    assert!(!is_entity_name("amp"));
    assert!(is_entity_name("amp;"));
    assert!(entity_count() > 300);
}

#[test]
fn test_decode_basic() {
    assert_eq!(decode("&amp;&#65;&#x42;"), "&AB");
    assert_eq!(decode("&lt;p&gt; &quot;q&quot;"), "<p> \"q\"");
    assert_eq!(decode("&#X1F600;"), "\u{1F600}");
}

#[test]
fn test_decode_borrows_when_unchanged() {
    assert!(matches!(decode("plain text"), Cow::Borrowed("plain text")));
    assert!(matches!(decode("a & b"), Cow::Borrowed(_)));
    assert!(matches!(decode("&amp;"), Cow::Owned(_)));
}

#[test]
fn test_missing_semicolon() {
    assert_eq!(
        decode_logged("&copy 2024"),
        ("\u{A9} 2024".to_string(), vec![WarningKind::MissingSemicolon])
    );
    // Longest legacy prefix wins
    assert_eq!(
        decode_logged("&notit;"),
        ("\u{AC}it;".to_string(), vec![WarningKind::MissingSemicolon])
    );
    assert_eq!(
        decode_logged("&#65 x"),
        ("A x".to_string(), vec![WarningKind::MissingSemicolon])
    );
}

#[test]
fn test_unknown_named_reference() {
    assert_eq!(
        decode_logged("&bogus; &amp"),
        (
            "&bogus; &".to_string(),
            vec![WarningKind::UnknownNamedReference, WarningKind::MissingSemicolon]
        )
    );
    // No semicolon and no legacy prefix is just text
    assert_eq!(decode_logged("&zzz"), ("&zzz".to_string(), vec![]));
}

#[test]
fn test_absence_of_digits() {
    assert_eq!(
        decode_logged("&#; &#x;"),
        (
            "&#; &#x;".to_string(),
            vec![WarningKind::AbsenceOfDigits, WarningKind::AbsenceOfDigits]
        )
    );
}

#[test]
fn test_invalid_numeric_references() {
    for input in ["&#0;", "&#x110000;", "&#xD800;", "&#xFFFE;", "&#xFDD0;", "&#99999999999;"] {
        assert_eq!(
            decode_logged(input),
            (
                "\u{FFFD}".to_string(),
                vec![WarningKind::InvalidNumericReference]
            ),
            "decoding {input}"
        );
    }
}

#[test]
fn test_c1_controls_use_windows_1252() {
    assert_eq!(
        decode_logged("&#x80;&#150;"),
        (
            "\u{20AC}\u{2013}".to_string(),
            vec![
                WarningKind::ControlCharacterReference,
                WarningKind::ControlCharacterReference
            ]
        )
    );
    // No Windows-1252 mapping: kept as is
    assert_eq!(decode("&#x81;"), "\u{81}");
    // Whitespace controls are fine
    assert_eq!(decode_logged("&#9;"), ("\t".to_string(), vec![]));
}

#[test]
fn test_attribute_historical_rule() {
    assert_eq!(decode_attribute("?a=1&copy=2"), "?a=1&copy=2");
    assert_eq!(decode_attribute("&copyx"), "&copyx");
    assert_eq!(decode_attribute("&copy "), "\u{A9} ");
    assert_eq!(decode_attribute("&copy;=2"), "\u{A9}=2");
    // Text content has no such rule
    assert_eq!(decode("&copy=2"), "\u{A9}=2");
}

#[test]
fn test_warning_spans_are_relative() {
    let mut spans = Vec::new();
    let _ = decode_attribute_with("ab &lt &#;", |w| spans.push(w.span));
    assert_eq!(spans, [Span::new(3, 6), Span::new(7, 9)]);
}

#[test]
fn test_encode() {
    assert_eq!(
        encode(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert!(matches!(encode("nothing to do"), Cow::Borrowed(_)));
}

#[test]
fn test_encode_keeps_existing_references() {
    assert_eq!(
        encode("&amp; &#169; &#xA9; &copy; &bogus;"),
        "&amp; &#169; &#xA9; &copy; &amp;bogus;"
    );
    assert_eq!(encode("&#; &#x;"), "&amp;#; &amp;#x;");
    // Idempotent
    let once = encode("a < b & c");
    assert_eq!(encode(&once), once);
}

#[test]
fn test_decode_undoes_encode() {
    for text in ["plain", "<tag attr=\"v\">", "it's & that's", "\u{1F600} & \u{A9}"] {
        assert_eq!(decode(&encode(text)), text);
    }
}
