//! Escaping text for markup.

use std::borrow::Cow;

use super::named_character_references::is_entity_name;

/// Replace `"`, `&`, `'`, `<`, and `>` with character references.
///
/// `'` becomes `&#39;`, the rest their named references. An `&` that already
/// starts a complete reference (`&name;` for a known name, `&#NN;`, or
/// `&#xHH;`) is copied through, so escaping is idempotent.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
#[must_use]
pub fn encode(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(['"', '&', '\'', '<', '>']) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for (index, c) in text[first..].char_indices() {
        let at = first + index;
        match c {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' if !starts_reference(&text[at..]) => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Returns true if `text` (starting at an `&`) begins with a complete
/// character reference.
fn starts_reference(text: &str) -> bool {
    let rest = &text[1..];
    if let Some(numeric) = rest.strip_prefix('#') {
        let (digits, radix) = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16),
            None => (numeric, 10),
        };
        let len = digits
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(digits.len());
        return len > 0 && digits[len..].starts_with(';');
    }
    rest.find(';')
        .is_some_and(|end| is_entity_name(&rest[..=end]))
}
