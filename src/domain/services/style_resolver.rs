//! Per-node style resolution
//!
//! Combines the node's role, the default-value classifier, and the
//! active theme into a single [`StyleMutation`] for one node.

use crate::domain::entities::style_rule::StyleMap;
use crate::domain::entities::theme::ProjectTheme;
use crate::domain::services::default_classifier;
use crate::domain::services::role_inspector::NodeRole;

/// The style change to apply to one node
#[derive(Clone, Debug, PartialEq)]
pub enum StyleMutation {
    /// Set `color` only
    SetColor(String),
    /// Set `background` and `color`
    SetSurface { background: String, color: String },
    /// Set `background`, `color`, and `border`
    SetTriple {
        background: String,
        color: String,
        border: String,
    },
    /// Leave the node alone
    None,
}

impl StyleMutation {
    /// The partial style map to write, or `None` for no change
    pub fn into_style_map(self) -> Option<StyleMap> {
        let mut map = StyleMap::new();
        match self {
            StyleMutation::SetColor(color) => {
                map.insert("color".to_string(), color);
            }
            StyleMutation::SetSurface { background, color } => {
                map.insert("background".to_string(), background);
                map.insert("color".to_string(), color);
            }
            StyleMutation::SetTriple {
                background,
                color,
                border,
            } => {
                map.insert("background".to_string(), background);
                map.insert("color".to_string(), color);
                map.insert("border".to_string(), border);
            }
            StyleMutation::None => return Option::None,
        }
        Some(map)
    }
}

fn style_value<'a>(styles: &'a StyleMap, property: &str) -> &'a str {
    styles.get(property).map(String::as_str).unwrap_or("")
}

fn has_background(styles: &StyleMap) -> bool {
    !style_value(styles, "background").trim().is_empty()
        || !style_value(styles, "background-color").trim().is_empty()
}

/// Compute the mutation for one node.
///
/// Buttons always receive some themed styling: a non-default background
/// is read as an intentional variant and mapped to the secondary triple
/// rather than skipped.
pub fn resolve(role: NodeRole, styles: &StyleMap, theme: &ProjectTheme) -> StyleMutation {
    match role {
        NodeRole::Text => {
            if default_classifier::is_default_text_color(style_value(styles, "color")) {
                StyleMutation::SetColor(theme.text.clone())
            } else {
                StyleMutation::None
            }
        }
        NodeRole::Button => {
            if default_classifier::is_default_button_background(style_value(styles, "background"))
            {
                StyleMutation::SetTriple {
                    background: theme.button_primary.clone(),
                    color: theme.button_primary_text.clone(),
                    border: "none".to_string(),
                }
            } else {
                StyleMutation::SetTriple {
                    background: theme.button_secondary.clone(),
                    color: theme.button_secondary_text.clone(),
                    border: theme.outline_border(),
                }
            }
        }
        NodeRole::Link => {
            if !has_background(styles)
                && default_classifier::is_default_link_color(style_value(styles, "color"))
            {
                StyleMutation::SetColor(theme.primary.clone())
            } else {
                StyleMutation::None
            }
        }
        // Fields are always re-themed; users rarely hand-style raw controls
        NodeRole::Field => StyleMutation::SetTriple {
            background: theme.surface.clone(),
            color: theme.surface_text.clone(),
            border: theme.outline_border(),
        },
        NodeRole::SurfaceBase => StyleMutation::SetSurface {
            background: theme.background.clone(),
            color: theme.text.clone(),
        },
        NodeRole::SurfaceElevated => StyleMutation::SetSurface {
            background: theme.surface.clone(),
            color: theme.surface_text.clone(),
        },
        // Root and shell containers are handled by the rule manager
        NodeRole::Container => StyleMutation::None,
    }
}
