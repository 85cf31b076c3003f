//! MemoryDocumentGateway - in-memory document tree
//!
//! Arena-backed implementation of [`DocumentPort`]: the reference host
//! for examples and the test double for the engine. Global rules live in
//! a selector-keyed map, so the one-rule-per-selector invariant holds
//! structurally. Test hooks can simulate a rule-store outage and
//! malformed nodes.

use std::collections::{BTreeMap, HashSet};

use crate::application::ports::document_port::{
    AttrMap, DocumentError, DocumentPort, NodeHandle,
};
use crate::domain::entities::style_rule::{StyleMap, StyleRule};

/// One node of the in-memory tree
#[derive(Clone, Debug, Default)]
struct NodeData {
    tag_name: String,
    component_type: String,
    attributes: AttrMap,
    styles: StyleMap,
    children: Vec<NodeHandle>,
    parent: Option<NodeHandle>,
}

/// In-memory document/editing session
#[derive(Debug, Default)]
pub struct MemoryDocumentGateway {
    nodes: Vec<NodeData>,
    root: Option<NodeHandle>,
    rules: BTreeMap<String, StyleMap>,
    rules_available: bool,
    broken: HashSet<u64>,
    rerender_count: usize,
}

impl MemoryDocumentGateway {
    /// Create an empty document (no root yet)
    pub fn new() -> Self {
        Self {
            rules_available: true,
            ..Self::default()
        }
    }

    /// Create the root node
    pub fn add_root(&mut self, tag_name: impl Into<String>) -> NodeHandle {
        let handle = self.push_node(tag_name.into(), None);
        self.root = Some(handle);
        handle
    }

    /// Append a child node under `parent`
    pub fn add_child(&mut self, parent: NodeHandle, tag_name: impl Into<String>) -> NodeHandle {
        let handle = self.push_node(tag_name.into(), Some(parent));
        self.nodes[parent.0 as usize].children.push(handle);
        handle
    }

    fn push_node(&mut self, tag_name: String, parent: Option<NodeHandle>) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len() as u64);
        self.nodes.push(NodeData {
            tag_name,
            parent,
            ..NodeData::default()
        });
        handle
    }

    /// Set the editor-level component type
    pub fn set_component_type(&mut self, node: NodeHandle, component_type: impl Into<String>) {
        self.nodes[node.0 as usize].component_type = component_type.into();
    }

    /// Set an attribute (e.g. `id`, `class`, `data-surface`)
    pub fn set_attribute(
        &mut self,
        node: NodeHandle,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.nodes[node.0 as usize]
            .attributes
            .insert(name.into(), value.into());
    }

    /// Set a single style property
    pub fn set_style_value(
        &mut self,
        node: NodeHandle,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.nodes[node.0 as usize]
            .styles
            .insert(property.into(), value.into());
    }

    /// Read a single style property (assertion helper)
    pub fn style_value(&self, node: NodeHandle, property: &str) -> Option<String> {
        self.nodes[node.0 as usize].styles.get(property).cloned()
    }

    /// The node's parent back-reference
    pub fn parent(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.nodes[node.0 as usize].parent
    }

    /// The rule bound to `selector`, if any
    pub fn rule(&self, selector: &str) -> Option<&StyleMap> {
        self.rules.get(selector)
    }

    /// Number of global rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// How many re-renders the engine requested
    pub fn rerender_count(&self) -> usize {
        self.rerender_count
    }

    /// Simulate the rule store going away (or coming back)
    pub fn set_rules_available(&mut self, available: bool) {
        self.rules_available = available;
    }

    /// Mark a node as malformed: every per-node accessor fails for it
    pub fn break_node(&mut self, node: NodeHandle) {
        self.broken.insert(node.0);
    }

    /// Deterministic snapshot of every node's styles
    pub fn styles_snapshot(&self) -> BTreeMap<u64, BTreeMap<String, String>> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| {
                (
                    i as u64,
                    n.styles
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                )
            })
            .collect()
    }

    /// Deterministic snapshot of the global rules
    pub fn rules_snapshot(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        self.rules
            .iter()
            .map(|(sel, props)| {
                (
                    sel.clone(),
                    props.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
                )
            })
            .collect()
    }

    fn node(&self, handle: NodeHandle) -> Result<&NodeData, DocumentError> {
        if self.broken.contains(&handle.0) {
            return Err(DocumentError::MalformedNode(format!("{:?}", handle)));
        }
        self.nodes
            .get(handle.0 as usize)
            .ok_or_else(|| DocumentError::MalformedNode(format!("{:?}", handle)))
    }

    fn node_mut(&mut self, handle: NodeHandle) -> Result<&mut NodeData, DocumentError> {
        if self.broken.contains(&handle.0) {
            return Err(DocumentError::MalformedNode(format!("{:?}", handle)));
        }
        self.nodes
            .get_mut(handle.0 as usize)
            .ok_or_else(|| DocumentError::MalformedNode(format!("{:?}", handle)))
    }

    /// Minimal selector matching: `#id`, `.class`, or a tag name
    fn matches(&self, node: &NodeData, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            return node.attributes.get("id").map(String::as_str) == Some(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return node
                .attributes
                .get("class")
                .map(|c| c.split_whitespace().any(|part| part == class))
                .unwrap_or(false);
        }
        node.tag_name.eq_ignore_ascii_case(selector)
    }

    fn collect_matches(&self, node: NodeHandle, selector: &str, out: &mut Vec<NodeHandle>) {
        if let Some(data) = self.nodes.get(node.0 as usize) {
            if self.matches(data, selector) {
                out.push(node);
            }
            for child in &data.children {
                self.collect_matches(*child, selector, out);
            }
        }
    }
}

impl DocumentPort for MemoryDocumentGateway {
    fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    fn find_by_selector(&self, node: NodeHandle, selector: &str) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        self.collect_matches(node, selector, &mut out);
        out
    }

    fn children(&self, node: NodeHandle) -> Vec<NodeHandle> {
        self.nodes
            .get(node.0 as usize)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn tag_name(&self, node: NodeHandle) -> Result<String, DocumentError> {
        Ok(self.node(node)?.tag_name.clone())
    }

    fn component_type(&self, node: NodeHandle) -> Result<String, DocumentError> {
        Ok(self.node(node)?.component_type.clone())
    }

    fn attributes(&self, node: NodeHandle) -> Result<AttrMap, DocumentError> {
        Ok(self.node(node)?.attributes.clone())
    }

    fn style(&self, node: NodeHandle) -> Result<StyleMap, DocumentError> {
        Ok(self.node(node)?.styles.clone())
    }

    fn set_style(&mut self, node: NodeHandle, partial: &StyleMap) -> Result<(), DocumentError> {
        let data = self.node_mut(node)?;
        for (property, value) in partial {
            data.styles.insert(property.clone(), value.clone());
        }
        Ok(())
    }

    fn remove_style_props(
        &mut self,
        node: NodeHandle,
        properties: &[&str],
    ) -> Result<(), DocumentError> {
        let data = self.node_mut(node)?;
        for property in properties {
            data.styles.remove(*property);
        }
        Ok(())
    }

    fn list_global_rules(&self) -> Result<Vec<StyleRule>, DocumentError> {
        if !self.rules_available {
            return Err(DocumentError::RuleStoreUnavailable("store offline".to_string()));
        }
        Ok(self
            .rules
            .iter()
            .map(|(sel, props)| StyleRule::with_properties(sel.clone(), props.clone()))
            .collect())
    }

    fn upsert_global_rule(
        &mut self,
        selector: &str,
        properties: &StyleMap,
    ) -> Result<(), DocumentError> {
        if !self.rules_available {
            return Err(DocumentError::RuleStoreUnavailable("store offline".to_string()));
        }
        self.rules.insert(selector.to_string(), properties.clone());
        Ok(())
    }

    fn remove_global_rule(&mut self, selector: &str) -> Result<(), DocumentError> {
        if !self.rules_available {
            return Err(DocumentError::RuleStoreUnavailable("store offline".to_string()));
        }
        self.rules.remove(selector);
        Ok(())
    }

    fn request_rerender(&mut self) {
        self.rerender_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_construction_and_parents() {
        let mut doc = MemoryDocumentGateway::new();
        let root = doc.add_root("body");
        let child = doc.add_child(root, "div");
        let grandchild = doc.add_child(child, "p");

        assert_eq!(doc.root(), Some(root));
        assert_eq!(doc.children(root), vec![child]);
        assert_eq!(doc.parent(grandchild), Some(child));
        assert_eq!(doc.parent(root), None);
    }

    #[test]
    fn test_selector_matching() {
        let mut doc = MemoryDocumentGateway::new();
        let root = doc.add_root("body");
        let shell = doc.add_child(root, "div");
        doc.set_attribute(shell, "id", "root");
        let card = doc.add_child(shell, "div");
        doc.set_attribute(card, "class", "card featured");
        let button = doc.add_child(card, "button");

        assert_eq!(doc.find_by_selector(root, "#root"), vec![shell]);
        assert_eq!(doc.find_by_selector(root, ".card"), vec![card]);
        assert_eq!(doc.find_by_selector(root, ".featured"), vec![card]);
        assert_eq!(doc.find_by_selector(root, "button"), vec![button]);
        assert_eq!(doc.find_by_selector(root, "body"), vec![root]);
        assert!(doc.find_by_selector(root, ".missing").is_empty());
    }

    #[test]
    fn test_style_merge_and_removal() {
        let mut doc = MemoryDocumentGateway::new();
        let root = doc.add_root("body");
        doc.set_style_value(root, "color", "#111111");
        doc.set_style_value(root, "font-size", "16px");

        let mut partial = StyleMap::new();
        partial.insert("color".to_string(), "#222222".to_string());
        partial.insert("background".to_string(), "#ffffff".to_string());
        doc.set_style(root, &partial).unwrap();

        assert_eq!(doc.style_value(root, "color").as_deref(), Some("#222222"));
        assert_eq!(doc.style_value(root, "font-size").as_deref(), Some("16px"));

        doc.remove_style_props(root, &["color", "background"]).unwrap();
        assert_eq!(doc.style_value(root, "color"), None);
        assert_eq!(doc.style_value(root, "font-size").as_deref(), Some("16px"));
    }

    #[test]
    fn test_rules_are_keyed_by_selector() {
        let mut doc = MemoryDocumentGateway::new();
        let mut props = StyleMap::new();
        props.insert("background".to_string(), "#000".to_string());

        doc.upsert_global_rule("body", &props).unwrap();
        props.insert("background".to_string(), "#fff".to_string());
        doc.upsert_global_rule("body", &props).unwrap();

        assert_eq!(doc.rule_count(), 1);
        assert_eq!(
            doc.rule("body").unwrap().get("background").map(String::as_str),
            Some("#fff")
        );
        assert_eq!(doc.list_global_rules().unwrap().len(), 1);
    }

    #[test]
    fn test_offline_rule_store_errors() {
        let mut doc = MemoryDocumentGateway::new();
        doc.set_rules_available(false);

        assert!(doc.list_global_rules().is_err());
        assert!(doc.upsert_global_rule("body", &StyleMap::new()).is_err());
        assert!(doc.remove_global_rule("body").is_err());
    }

    #[test]
    fn test_broken_node_errors_on_access() {
        let mut doc = MemoryDocumentGateway::new();
        let root = doc.add_root("body");
        let child = doc.add_child(root, "div");
        doc.break_node(child);

        assert!(doc.tag_name(child).is_err());
        assert!(doc.style(child).is_err());
        assert!(doc.set_style(child, &StyleMap::new()).is_err());
        // Traversal still works so siblings and children are reachable
        assert_eq!(doc.children(root), vec![child]);
    }
}
