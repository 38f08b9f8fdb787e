//! [WAI-ARIA 1.2 § 6.6 Definitions of States and Properties](https://www.w3.org/TR/wai-aria-1.2/#state_prop_def)

use std::collections::HashSet;
use std::sync::LazyLock;

use super::lowercase;

/// Every ARIA state and property attribute, in the order of the ARIA index.
pub const ARIA_ATTRIBUTES: &[&str] = &[
    "aria-activedescendant",
    "aria-atomic",
    "aria-autocomplete",
    "aria-busy",
    "aria-checked",
    "aria-colcount",
    "aria-colindex",
    "aria-colspan",
    "aria-controls",
    "aria-current",
    "aria-describedby",
    "aria-details",
    "aria-disabled",
    "aria-dropeffect",
    "aria-errormessage",
    "aria-expanded",
    "aria-flowto",
    "aria-grabbed",
    "aria-haspopup",
    "aria-hidden",
    "aria-invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-level",
    "aria-live",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-orientation",
    "aria-owns",
    "aria-placeholder",
    "aria-posinset",
    "aria-pressed",
    "aria-readonly",
    "aria-relevant",
    "aria-required",
    "aria-roledescription",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowspan",
    "aria-selected",
    "aria-setsize",
    "aria-sort",
    "aria-valuemax",
    "aria-valuemin",
    "aria-valuenow",
    "aria-valuetext",
];

static ARIA: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ARIA_ATTRIBUTES.iter().copied().collect());

/// Returns true for `role` and the ARIA state and property attributes,
/// ignoring ASCII case.
///
/// Unknown `aria-` names are not ARIA attributes.
#[must_use]
pub fn is_aria_attribute(name: &str) -> bool {
    let name = lowercase(name);
    name == "role" || ARIA.contains(name.as_ref())
}
