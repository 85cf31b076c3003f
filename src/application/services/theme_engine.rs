//! ThemeEngine - the theme resolution orchestrator
//!
//! The only entry point hosts call. Switching themes first reverts what
//! the outgoing theme wrote, so repeated or alternating applications
//! converge instead of drifting, while styling customized before any
//! theming survives the switch. The user-facing reset is the full strip
//! back to the pre-theme baseline. The engine borrows the document port
//! for one synchronous call at a time and stores no node references.
//!
//! Errors never reach the caller: a missing root makes the call a
//! no-op, an unavailable rule store degrades to direct node styling,
//! and a malformed node is skipped without aborting the walk.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::application::ports::document_port::{DocumentError, DocumentPort, NodeHandle};
use crate::application::services::rule_manager;
use crate::domain::entities::style_rule::StyleMap;
use crate::domain::entities::theme::ProjectTheme;
use crate::domain::services::revert_resolver::{self, RESET_PROPS};
use crate::domain::services::role_inspector::role_of;
use crate::domain::services::style_resolver;

/// Shared slot holding the currently-applied theme for one open
/// document/session. Clone the handle to let the host UI read the
/// active theme without going through the engine.
#[derive(Clone, Debug, Default)]
pub struct ActiveThemeSlot {
    inner: Arc<RwLock<Option<ProjectTheme>>>,
}

impl ActiveThemeSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently-applied theme, if any
    pub fn get(&self) -> Option<ProjectTheme> {
        self.inner.read().clone()
    }

    /// Whether a theme is currently applied
    pub fn is_themed(&self) -> bool {
        self.inner.read().is_some()
    }

    fn set(&self, theme: ProjectTheme) {
        *self.inner.write() = Some(theme);
    }

    fn clear(&self) {
        *self.inner.write() = None;
    }
}

/// Theme resolution engine for one open document/editing session.
///
/// Not a process-wide singleton: hosts with several open documents hold
/// one engine per document.
#[derive(Debug, Default)]
pub struct ThemeEngine {
    slot: ActiveThemeSlot,
}

impl ThemeEngine {
    /// Create an engine for a freshly opened document
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `theme` to the whole document: revert the outgoing theme,
    /// restyle every node, install the root-level rules, record the
    /// theme, and request a host re-render.
    pub fn apply_theme<P: DocumentPort + ?Sized>(&mut self, port: &mut P, theme: &ProjectTheme) {
        log_fn!("ThemeEngine::apply_theme", "theme={}", theme.id);

        let Some(root) = port.root() else {
            log!("ThemeEngine::apply_theme - document has no root, skipping");
            return;
        };

        // Clean switch: remove exactly what the outgoing theme wrote so
        // the apply pass observes an unthemed tree
        if let Some(outgoing) = self.slot.get() {
            revert_node(port, root, &outgoing);
        }
        rule_manager::clear_root_rules(port);
        self.slot.clear();

        apply_node(port, root, theme);
        rule_manager::install_root_rules(port, theme);

        self.slot.set(theme.clone());
        port.request_rerender();
    }

    /// Strip the governed property set from every node regardless of
    /// value, remove the managed rules, and clear the active theme.
    ///
    /// The full strip is intentional: once themed, "theme-set" and
    /// "user-set" are indistinguishable, so reset reverses to the
    /// pre-theme baseline only.
    pub fn reset_theme<P: DocumentPort + ?Sized>(&mut self, port: &mut P) {
        log_fn!("ThemeEngine::reset_theme");

        let Some(root) = port.root() else {
            log!("ThemeEngine::reset_theme - document has no root, skipping");
            return;
        };

        strip_node(port, root);
        rule_manager::clear_root_rules(port);
        self.slot.clear();
        port.request_rerender();
    }

    /// The theme currently applied to this document, if any
    pub fn active_theme(&self) -> Option<ProjectTheme> {
        self.slot.get()
    }

    /// A shareable handle to the active-theme slot
    pub fn slot(&self) -> ActiveThemeSlot {
        self.slot.clone()
    }
}

/// Depth-first strip of the full reset property set from one subtree
fn strip_node<P: DocumentPort + ?Sized>(port: &mut P, node: NodeHandle) {
    if let Err(e) = port.remove_style_props(node, RESET_PROPS) {
        log!("strip_node - skipping {:?}: {}", node, e);
    }
    for child in port.children(node) {
        strip_node(port, child);
    }
}

/// Depth-first selective revert of one outgoing theme over one subtree
fn revert_node<P: DocumentPort + ?Sized>(port: &mut P, node: NodeHandle, outgoing: &ProjectTheme) {
    match port.style(node) {
        Ok(styles) => {
            let props = revert_resolver::props_to_revert(&styles, outgoing);
            if !props.is_empty() {
                if let Err(e) = port.remove_style_props(node, &props) {
                    log!("revert_node - skipping {:?}: {}", node, e);
                }
            }
        }
        Err(e) => {
            log!("revert_node - skipping {:?}: {}", node, e);
        }
    }

    for child in port.children(node) {
        revert_node(port, child, outgoing);
    }
}

/// Depth-first application of the style resolver over one subtree.
/// A malformed node is skipped; its children are still visited.
fn apply_node<P: DocumentPort + ?Sized>(port: &mut P, node: NodeHandle, theme: &ProjectTheme) {
    match node_mutation(port, node, theme) {
        Ok(Some(partial)) => {
            if let Err(e) = port.set_style(node, &partial) {
                log!("apply_node - set_style {:?} failed: {}", node, e);
            }
        }
        Ok(None) => {}
        Err(e) => {
            log!("apply_node - skipping {:?}: {}", node, e);
        }
    }

    for child in port.children(node) {
        apply_node(port, child, theme);
    }
}

/// Classify one node and compute its partial style map, if any
fn node_mutation<P: DocumentPort + ?Sized>(
    port: &P,
    node: NodeHandle,
    theme: &ProjectTheme,
) -> Result<Option<StyleMap>, DocumentError> {
    let tag = port.tag_name(node)?;
    let component_type = port.component_type(node)?;
    let attributes = port.attributes(node)?;
    let styles = port.style(node)?;

    let role = role_of(
        &tag,
        &component_type,
        attributes.get("data-surface").map(String::as_str),
    );
    Ok(style_resolver::resolve(role, &styles, theme).into_style_map())
}
