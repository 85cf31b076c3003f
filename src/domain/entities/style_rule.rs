//! StyleRule entity - a document-scoped style rule keyed by selector
//!
//! Distinct from per-node styles: a rule exists independently of any
//! single tree node and is managed as a flat, de-duplicated collection
//! keyed by its selector string.

use std::collections::HashMap;

/// Per-node or per-rule style properties (`property -> value`)
pub type StyleMap = HashMap<String, String>;

/// A document-scoped rule (e.g. bound to the whole canvas)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleRule {
    /// Selector the rule is bound to (e.g. `body`, `#root`)
    pub selector: String,
    /// The rule's own property map
    pub properties: StyleMap,
}

impl StyleRule {
    /// Create a new rule for a selector
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            properties: StyleMap::new(),
        }
    }

    /// Create a rule with initial properties
    pub fn with_properties(selector: impl Into<String>, properties: StyleMap) -> Self {
        Self {
            selector: selector.into(),
            properties,
        }
    }

    /// Set a property value
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Get a property value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_properties() {
        let mut rule = StyleRule::new("body");
        rule.set("background", "#0f172a");
        rule.set("color", "#e2e8f0");

        assert_eq!(rule.selector, "body");
        assert_eq!(rule.get("background"), Some("#0f172a"));
        assert_eq!(rule.get("missing"), None);
    }
}
