//! DocumentPort - interface to the hosting document/editing session
//!
//! The engine never owns the document tree. Hosts expose it through this
//! port and the engine borrows read/write access for the duration of one
//! operation, storing no node references after returning.

use std::collections::HashMap;

use crate::domain::entities::style_rule::{StyleMap, StyleRule};

/// Opaque handle to a node in the host's tree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// Node attribute map (includes the optional `data-surface` marker)
pub type AttrMap = HashMap<String, String>;

/// Document operation error
#[derive(Debug, Clone)]
pub enum DocumentError {
    /// The tree has no root node
    MissingRoot,
    /// A node lacks an expected accessor
    MalformedNode(String),
    /// The global rule store cannot be queried or mutated
    RuleStoreUnavailable(String),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::MissingRoot => write!(f, "Document has no root node"),
            DocumentError::MalformedNode(s) => write!(f, "Malformed node: {}", s),
            DocumentError::RuleStoreUnavailable(s) => {
                write!(f, "Rule store unavailable: {}", s)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// Port interface to the host document/editing session
pub trait DocumentPort {
    /// Root of the document tree; `None` is a valid, handled state
    fn root(&self) -> Option<NodeHandle>;

    /// Structural query for nodes matching a selector
    fn find_by_selector(&self, node: NodeHandle, selector: &str) -> Vec<NodeHandle>;

    /// Ordered child nodes
    fn children(&self, node: NodeHandle) -> Vec<NodeHandle>;

    /// Semantic element kind (e.g. `button`, `h1`)
    fn tag_name(&self, node: NodeHandle) -> Result<String, DocumentError>;

    /// Editor-level kind (e.g. `text`)
    fn component_type(&self, node: NodeHandle) -> Result<String, DocumentError>;

    /// Node attributes (read-only; carries the `data-surface` marker)
    fn attributes(&self, node: NodeHandle) -> Result<AttrMap, DocumentError>;

    /// The node's current style map
    fn style(&self, node: NodeHandle) -> Result<StyleMap, DocumentError>;

    /// Merge a partial style map into the node's styles
    fn set_style(&mut self, node: NodeHandle, partial: &StyleMap) -> Result<(), DocumentError>;

    /// Remove the named properties from the node's style map
    fn remove_style_props(
        &mut self,
        node: NodeHandle,
        properties: &[&str],
    ) -> Result<(), DocumentError>;

    /// All document-scoped rules
    fn list_global_rules(&self) -> Result<Vec<StyleRule>, DocumentError>;

    /// Create or replace the rule bound to `selector`
    fn upsert_global_rule(
        &mut self,
        selector: &str,
        properties: &StyleMap,
    ) -> Result<(), DocumentError>;

    /// Remove the rule bound to `selector`, if any
    fn remove_global_rule(&mut self, selector: &str) -> Result<(), DocumentError>;

    /// Fire-and-forget re-render hint; the engine never waits on it
    fn request_rerender(&mut self);
}

/// A null document port for testing: empty tree, unavailable rule store
pub struct NullDocumentPort;

impl DocumentPort for NullDocumentPort {
    fn root(&self) -> Option<NodeHandle> {
        None
    }

    fn find_by_selector(&self, _node: NodeHandle, _selector: &str) -> Vec<NodeHandle> {
        Vec::new()
    }

    fn children(&self, _node: NodeHandle) -> Vec<NodeHandle> {
        Vec::new()
    }

    fn tag_name(&self, node: NodeHandle) -> Result<String, DocumentError> {
        Err(DocumentError::MalformedNode(format!("{:?}", node)))
    }

    fn component_type(&self, node: NodeHandle) -> Result<String, DocumentError> {
        Err(DocumentError::MalformedNode(format!("{:?}", node)))
    }

    fn attributes(&self, node: NodeHandle) -> Result<AttrMap, DocumentError> {
        Err(DocumentError::MalformedNode(format!("{:?}", node)))
    }

    fn style(&self, node: NodeHandle) -> Result<StyleMap, DocumentError> {
        Err(DocumentError::MalformedNode(format!("{:?}", node)))
    }

    fn set_style(&mut self, _node: NodeHandle, _partial: &StyleMap) -> Result<(), DocumentError> {
        Ok(())
    }

    fn remove_style_props(
        &mut self,
        _node: NodeHandle,
        _properties: &[&str],
    ) -> Result<(), DocumentError> {
        Ok(())
    }

    fn list_global_rules(&self) -> Result<Vec<StyleRule>, DocumentError> {
        Err(DocumentError::RuleStoreUnavailable("null port".to_string()))
    }

    fn upsert_global_rule(
        &mut self,
        _selector: &str,
        _properties: &StyleMap,
    ) -> Result<(), DocumentError> {
        Err(DocumentError::RuleStoreUnavailable("null port".to_string()))
    }

    fn remove_global_rule(&mut self, _selector: &str) -> Result<(), DocumentError> {
        Err(DocumentError::RuleStoreUnavailable("null port".to_string()))
    }

    fn request_rerender(&mut self) {}
}
