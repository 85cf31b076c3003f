//! Node role inspection
//!
//! Derives a coarse role from a node's tag name, editor-level component
//! type, and the optional `data-surface` marker attribute. Pure and
//! total: every node gets a role, unknown shapes fall through to
//! [`NodeRole::Container`] and receive no styling.

/// Coarse role a node plays for theming purposes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    /// Page-level background-bearing container (`data-surface="base"`)
    SurfaceBase,
    /// Card-level background-bearing container (`data-surface="elevated"`)
    SurfaceElevated,
    /// `<button>` element
    Button,
    /// `<a>` element
    Link,
    /// Form control (`input`, `textarea`, `select`)
    Field,
    /// Text-bearing element (headings, paragraphs, spans, divs)
    Text,
    /// Anything else; never styled directly
    Container,
}

const FIELD_TAGS: &[&str] = &["input", "textarea", "select"];
const TEXT_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "div"];

/// Classify a node. First match wins: surface markers take precedence
/// over the tag, the tag over the component type.
pub fn role_of(tag_name: &str, component_type: &str, data_surface: Option<&str>) -> NodeRole {
    match data_surface {
        Some("base") => return NodeRole::SurfaceBase,
        Some("elevated") => return NodeRole::SurfaceElevated,
        _ => {}
    }

    let tag = tag_name.to_ascii_lowercase();
    match tag.as_str() {
        "button" => NodeRole::Button,
        "a" => NodeRole::Link,
        t if FIELD_TAGS.contains(&t) => NodeRole::Field,
        t if TEXT_TAGS.contains(&t) || component_type == "text" => NodeRole::Text,
        _ => NodeRole::Container,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_marker_wins_over_tag() {
        assert_eq!(role_of("div", "", Some("base")), NodeRole::SurfaceBase);
        assert_eq!(
            role_of("button", "", Some("elevated")),
            NodeRole::SurfaceElevated
        );
    }

    #[test]
    fn test_tag_classification() {
        assert_eq!(role_of("button", "", None), NodeRole::Button);
        assert_eq!(role_of("a", "", None), NodeRole::Link);
        assert_eq!(role_of("input", "", None), NodeRole::Field);
        assert_eq!(role_of("textarea", "", None), NodeRole::Field);
        assert_eq!(role_of("select", "", None), NodeRole::Field);
        assert_eq!(role_of("h1", "", None), NodeRole::Text);
        assert_eq!(role_of("h6", "", None), NodeRole::Text);
        assert_eq!(role_of("p", "", None), NodeRole::Text);
        assert_eq!(role_of("span", "", None), NodeRole::Text);
        assert_eq!(role_of("div", "", None), NodeRole::Text);
    }

    #[test]
    fn test_component_type_text() {
        assert_eq!(role_of("section", "text", None), NodeRole::Text);
    }

    #[test]
    fn test_unknown_is_container() {
        assert_eq!(role_of("section", "", None), NodeRole::Container);
        assert_eq!(role_of("video", "media", None), NodeRole::Container);
        assert_eq!(role_of("", "", None), NodeRole::Container);
    }

    #[test]
    fn test_tag_case_insensitive() {
        assert_eq!(role_of("BUTTON", "", None), NodeRole::Button);
        assert_eq!(role_of("Div", "", None), NodeRole::Text);
    }

    #[test]
    fn test_unrecognized_surface_value_ignored() {
        assert_eq!(role_of("div", "", Some("floating")), NodeRole::Text);
    }
}
