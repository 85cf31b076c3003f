//! Global rule management
//!
//! Idempotent create/replace/delete of the document-scoped rules the
//! engine manages: one bound to the whole canvas and one bound to the
//! root shell container. Neither operation ever raises; a missing rule
//! store degrades to direct node styling so the in-tree visual effect
//! still lands.

use crate::application::ports::document_port::{DocumentPort, NodeHandle};
use crate::domain::entities::style_rule::StyleMap;
use crate::domain::entities::theme::ProjectTheme;
use crate::domain::services::default_classifier;

/// Selector for the whole-document canvas rule
pub const ROOT_SELECTOR: &str = "body";
/// Selector for the root shell container rule
pub const SHELL_SELECTOR: &str = "#root";

/// The selectors this engine owns; exactly one rule exists per entry
pub const MANAGED_SELECTORS: &[&str] = &[ROOT_SELECTOR, SHELL_SELECTOR];

/// Install the root-level rules for `theme`.
///
/// For each managed selector the existing rule is removed and exactly one
/// replacement inserted, then the same background/color pair is mirrored
/// directly onto the matching nodes for consistency with inline rendering
/// paths. The mirror doubles as the fallback when the rule store is
/// unavailable.
pub fn install_root_rules<P: DocumentPort + ?Sized>(port: &mut P, theme: &ProjectTheme) {
    let mut properties = StyleMap::new();
    properties.insert("background".to_string(), theme.background.clone());
    properties.insert("color".to_string(), theme.text.clone());

    for selector in MANAGED_SELECTORS {
        if let Err(e) = port.remove_global_rule(selector) {
            log!("install_root_rules - remove {} failed: {}", selector, e);
        }
        if let Err(e) = port.upsert_global_rule(selector, &properties) {
            log!("install_root_rules - upsert {} failed: {}", selector, e);
        }

        for node in mirror_targets(port, selector) {
            mirror_onto_node(port, node, theme);
        }
    }
}

/// Remove both managed rules unconditionally, regardless of content.
pub fn clear_root_rules<P: DocumentPort + ?Sized>(port: &mut P) {
    for selector in MANAGED_SELECTORS {
        if let Err(e) = port.remove_global_rule(selector) {
            log!("clear_root_rules - remove {} failed: {}", selector, e);
        }
    }
}

/// Nodes a managed selector's styling mirrors onto
fn mirror_targets<P: DocumentPort + ?Sized>(port: &P, selector: &str) -> Vec<NodeHandle> {
    let Some(root) = port.root() else {
        return Vec::new();
    };
    if selector == ROOT_SELECTOR {
        vec![root]
    } else {
        port.find_by_selector(root, selector)
    }
}

/// Write the theme's page background/color onto one node.
///
/// The text color is always mirrored; the background only replaces a
/// value the page-background classifier still recognizes as baseline,
/// so a hand-picked page background survives on the node itself.
fn mirror_onto_node<P: DocumentPort + ?Sized>(port: &mut P, node: NodeHandle, theme: &ProjectTheme) {
    let current_background = match port.style(node) {
        Ok(styles) => styles.get("background").cloned().unwrap_or_default(),
        Err(e) => {
            log!("mirror_onto_node - skipping {:?}: {}", node, e);
            return;
        }
    };

    let mut partial = StyleMap::new();
    partial.insert("color".to_string(), theme.text.clone());
    if default_classifier::is_default_page_background(&current_background) {
        partial.insert("background".to_string(), theme.background.clone());
    }

    if let Err(e) = port.set_style(node, &partial) {
        log!("mirror_onto_node - set_style {:?} failed: {}", node, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::memory_document_gateway::MemoryDocumentGateway;
    use crate::application::ports::document_port::NullDocumentPort;
    use crate::domain::entities::catalog::ThemeCatalog;

    fn theme() -> ProjectTheme {
        ThemeCatalog::builtin().find("midnight").unwrap().clone()
    }

    #[test]
    fn test_install_creates_one_rule_per_selector() {
        let mut doc = MemoryDocumentGateway::new();
        let root = doc.add_root("body");
        let shell = doc.add_child(root, "div");
        doc.set_attribute(shell, "id", "root");

        let t = theme();
        install_root_rules(&mut doc, &t);
        install_root_rules(&mut doc, &t);

        assert_eq!(doc.rule_count(), 2);
        let rule = doc.rule(ROOT_SELECTOR).unwrap();
        assert_eq!(rule.get("background").map(String::as_str), Some("#0f172a"));
        assert_eq!(rule.get("color").map(String::as_str), Some("#e2e8f0"));
        assert!(doc.rule(SHELL_SELECTOR).is_some());
    }

    #[test]
    fn test_install_mirrors_onto_root_and_shell() {
        let mut doc = MemoryDocumentGateway::new();
        let root = doc.add_root("body");
        let shell = doc.add_child(root, "div");
        doc.set_attribute(shell, "id", "root");

        install_root_rules(&mut doc, &theme());

        assert_eq!(doc.style_value(root, "background").as_deref(), Some("#0f172a"));
        assert_eq!(doc.style_value(shell, "color").as_deref(), Some("#e2e8f0"));
    }

    #[test]
    fn test_mirror_preserves_custom_page_background() {
        let mut doc = MemoryDocumentGateway::new();
        let root = doc.add_root("body");
        doc.set_style_value(root, "background", "url(hero.png) center / cover");

        install_root_rules(&mut doc, &theme());

        // Color mirrored, custom background kept on the node
        assert_eq!(doc.style_value(root, "color").as_deref(), Some("#e2e8f0"));
        assert_eq!(
            doc.style_value(root, "background").as_deref(),
            Some("url(hero.png) center / cover")
        );
        // The rule itself is still fully replaced
        assert_eq!(
            doc.rule(ROOT_SELECTOR).unwrap().get("background").map(String::as_str),
            Some("#0f172a")
        );
    }

    #[test]
    fn test_unavailable_store_falls_back_to_node_styles() {
        let mut doc = MemoryDocumentGateway::new();
        let root = doc.add_root("body");
        doc.set_rules_available(false);

        install_root_rules(&mut doc, &theme());

        assert_eq!(doc.rule_count(), 0);
        assert_eq!(doc.style_value(root, "background").as_deref(), Some("#0f172a"));
    }

    #[test]
    fn test_clear_removes_both_rules() {
        let mut doc = MemoryDocumentGateway::new();
        let root = doc.add_root("body");
        let shell = doc.add_child(root, "div");
        doc.set_attribute(shell, "id", "root");

        install_root_rules(&mut doc, &theme());
        clear_root_rules(&mut doc);

        assert_eq!(doc.rule_count(), 0);
    }

    #[test]
    fn test_operations_never_panic_on_null_port() {
        let mut port = NullDocumentPort;
        install_root_rules(&mut port, &theme());
        clear_root_rules(&mut port);
    }
}
