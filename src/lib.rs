//! Pagetheme - semantic theme resolution for page-builder documents
//!
//! Applies a named palette of semantic colors onto a hierarchical document
//! of styled nodes, overriding only values that are still at their unthemed
//! baseline and supporting a full reversal back to that baseline.
//!
//! The engine never owns the document tree: hosts expose it through the
//! [`application::ports::DocumentPort`] trait and the engine borrows it for
//! the duration of a single `apply_theme`/`reset_theme` call.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod adapters;
pub mod application;
pub mod domain;
pub mod shared;

// Re-export the public surface hosts actually touch
pub use application::ports::{DocumentPort, NodeHandle};
pub use application::services::ThemeEngine;
pub use domain::entities::{ProjectTheme, StyleRule, ThemeCatalog};
