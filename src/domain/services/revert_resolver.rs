//! Reverting previously applied theme styling
//!
//! Two reverse paths exist:
//!
//! - The user-facing reset strips the whole governed property set from
//!   every node regardless of value. Once themed, "theme-set" and
//!   "user-set" are indistinguishable, so reset only promises the
//!   pre-theme baseline, never an arbitrary prior custom state.
//! - A theme switch reverts selectively: only values the outgoing
//!   theme itself wrote are removed, so customizations made before any
//!   theming survive the switch. Matching is by palette literal, the
//!   same heuristic the default classifier uses.

use crate::domain::entities::style_rule::StyleMap;
use crate::domain::entities::theme::ProjectTheme;

/// Properties stripped by the full reset, regardless of value
pub const RESET_PROPS: &[&str] = &[
    "background",
    "background-color",
    "color",
    "border",
    "border-color",
];

/// Background values a theme application can write to a node
fn themed_backgrounds(theme: &ProjectTheme) -> [&String; 4] {
    [
        &theme.background,
        &theme.surface,
        &theme.button_primary,
        &theme.button_secondary,
    ]
}

/// Color values a theme application can write to a node
fn themed_colors(theme: &ProjectTheme) -> [&String; 5] {
    [
        &theme.text,
        &theme.surface_text,
        &theme.primary,
        &theme.button_primary_text,
        &theme.button_secondary_text,
    ]
}

/// Which properties of one node were written by `outgoing` and should
/// be removed before the next theme is applied
pub fn props_to_revert(styles: &StyleMap, outgoing: &ProjectTheme) -> Vec<&'static str> {
    let mut props = Vec::new();

    if let Some(bg) = styles.get("background") {
        if themed_backgrounds(outgoing).iter().any(|v| *v == bg) {
            props.push("background");
        }
    }
    if let Some(color) = styles.get("color") {
        if themed_colors(outgoing).iter().any(|v| *v == color) {
            props.push("color");
        }
    }
    if let Some(border) = styles.get("border") {
        if border == "none" || *border == outgoing.outline_border() {
            props.push("border");
        }
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::catalog::ThemeCatalog;

    fn theme() -> ProjectTheme {
        ThemeCatalog::builtin().find("midnight").unwrap().clone()
    }

    fn styles(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_theme_written_values_are_reverted() {
        let t = theme();
        let s = styles(&[
            ("background", t.surface.as_str()),
            ("color", t.text.as_str()),
            ("border", "none"),
        ]);

        let mut props = props_to_revert(&s, &t);
        props.sort();
        assert_eq!(props, vec!["background", "border", "color"]);
    }

    #[test]
    fn test_outline_border_is_reverted() {
        let t = theme();
        let s = styles(&[("border", "1px solid #334155")]);
        assert_eq!(props_to_revert(&s, &t), vec!["border"]);
    }

    #[test]
    fn test_user_values_survive() {
        let t = theme();
        let s = styles(&[
            ("background", "#ff0000"),
            ("color", "#ff00aa"),
            ("border", "2px dashed #00ff00"),
        ]);
        assert!(props_to_revert(&s, &t).is_empty());
    }

    #[test]
    fn test_untouched_node_reverts_nothing() {
        assert!(props_to_revert(&StyleMap::new(), &theme()).is_empty());
    }
}
