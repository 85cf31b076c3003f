//! ProjectTheme entity - a named palette of semantic colors
//!
//! This is the immutable value the engine applies to a document. Field
//! names serialize in camelCase so theme files interchange with the
//! original JSON theme format.

use serde::{Deserialize, Serialize};

/// A named palette of semantic colors applied across a whole document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTheme {
    /// Stable identifier (what hosts persist)
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description for theme pickers
    #[serde(default)]
    pub description: String,

    /// Whole-page background
    pub background: String,
    /// Default text color
    pub text: String,
    /// Accent color (links, highlights)
    pub primary: String,
    /// Secondary accent color
    pub secondary: String,
    /// Elevated surface background (cards, fields)
    pub surface: String,
    /// Text color on elevated surfaces
    pub surface_text: String,
    /// Border color for outlined elements
    pub border: String,
    /// Primary button background
    pub button_primary: String,
    /// Primary button text color
    pub button_primary_text: String,
    /// Secondary button background
    pub button_secondary: String,
    /// Secondary button text color
    pub button_secondary_text: String,
}

impl ProjectTheme {
    /// Border declaration for outlined elements (fields, secondary buttons)
    pub fn outline_border(&self) -> String {
        format!("1px solid {}", self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectTheme {
        ProjectTheme {
            id: "dark".to_string(),
            name: "Dark".to_string(),
            description: "Test palette".to_string(),
            background: "#0f172a".to_string(),
            text: "#e2e8f0".to_string(),
            primary: "#6366f1".to_string(),
            secondary: "#8b5cf6".to_string(),
            surface: "#1e293b".to_string(),
            surface_text: "#f1f5f9".to_string(),
            border: "#334155".to_string(),
            button_primary: "#6366f1".to_string(),
            button_primary_text: "#ffffff".to_string(),
            button_secondary: "#1e293b".to_string(),
            button_secondary_text: "#e2e8f0".to_string(),
        }
    }

    #[test]
    fn test_outline_border() {
        assert_eq!(sample().outline_border(), "1px solid #334155");
    }

    #[test]
    fn test_camel_case_interchange() {
        let json = serde_json::to_value(sample()).unwrap();
        // Original theme files use camelCase keys
        assert!(json.get("surfaceText").is_some());
        assert!(json.get("buttonPrimaryText").is_some());
        assert!(json.get("surface_text").is_none());
    }
}
