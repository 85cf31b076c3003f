//! Default-value classification
//!
//! The document tree records no provenance for style values, so the
//! engine distinguishes "never customized" from "customized" by
//! comparing against small fixed sets of known baseline literals. This
//! is a heuristic: a user who hand-picks a sentinel literal is
//! indistinguishable from an untouched node.

/// Known baseline text colors: common near-black and near-white literals
const BASELINE_TEXT_COLORS: &[&str] = &[
    "#000", "#000000", "#111", "#111111", "#111827", "#1f2937", "#333", "#333333", "#fff",
    "#ffffff", "#f9fafb", "black", "white",
];

/// Known baseline button backgrounds (solid accents shipped with blocks)
const BASELINE_BUTTON_BACKGROUNDS: &[&str] =
    &["#3b82f6", "#2563eb", "#4f46e5", "#6366f1", "#111827"];

/// Known baseline link/accent colors
const BASELINE_LINK_COLORS: &[&str] =
    &["#3b82f6", "#2563eb", "#0ea5e9", "#6366f1", "#4f46e5", "#60a5fa"];

/// Known baseline form-field backgrounds
const BASELINE_FIELD_BACKGROUNDS: &[&str] =
    &["#fff", "#ffffff", "#f9fafb", "#f3f4f6", "#f8fafc", "transparent"];

/// Known baseline page backgrounds
const BASELINE_PAGE_BACKGROUNDS: &[&str] =
    &["#fff", "#ffffff", "#fafafa", "#f9fafb", "#0a0a0a", "#050505", "#000000", "transparent"];

/// The starter-template page background
const BASELINE_PAGE_RADIAL: &str = "radial-gradient";
const BASELINE_PAGE_RADIAL_STOP: &str = "#050505";

fn normalized(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// Translucent black/white functional colors read as "default"
fn is_translucent_neutral(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    compact.starts_with("rgba(0,0,0,") || compact.starts_with("rgba(255,255,255,")
}

/// Is this text color still at its unthemed baseline?
pub fn is_default_text_color(value: &str) -> bool {
    let v = normalized(value);
    v.is_empty() || BASELINE_TEXT_COLORS.contains(&v.as_str()) || is_translucent_neutral(&v)
}

/// Is this button background still at its unthemed baseline?
///
/// Any gradient counts as baseline: block templates ship gradient
/// buttons, and users customizing a button pick solid colors.
pub fn is_default_button_background(value: &str) -> bool {
    let v = normalized(value);
    v.is_empty() || v.contains("gradient(") || BASELINE_BUTTON_BACKGROUNDS.contains(&v.as_str())
}

/// Is this link color still at its unthemed baseline?
///
/// The companion "no background set on the node" half of the link check
/// lives in the style resolver, which sees the whole style map.
pub fn is_default_link_color(value: &str) -> bool {
    let v = normalized(value);
    v.is_empty() || BASELINE_LINK_COLORS.contains(&v.as_str())
}

/// Is this form-field background still at its unthemed baseline?
///
/// The style resolver re-themes fields unconditionally, so it never
/// consults this predicate; it completes the per-role classification
/// surface for hosts that probe baselines directly.
pub fn is_default_field_background(value: &str) -> bool {
    let v = normalized(value);
    v.is_empty() || BASELINE_FIELD_BACKGROUNDS.contains(&v.as_str())
}

/// Is the whole-document background still at its unthemed baseline?
///
/// Used by the rule manager for the root-level rules, not per node.
pub fn is_default_page_background(value: &str) -> bool {
    let v = normalized(value);
    v.is_empty()
        || BASELINE_PAGE_BACKGROUNDS.contains(&v.as_str())
        || (v.contains(BASELINE_PAGE_RADIAL) && v.contains(BASELINE_PAGE_RADIAL_STOP))
}
