//! Domain Entities - Core theming objects
//!
//! Entities represent the core concepts of the theme resolution engine:
//! the theme palette itself, the catalog of available themes, and the
//! document-scoped style rules the engine manages.

pub mod catalog;
pub mod style_rule;
pub mod theme;

pub use catalog::ThemeCatalog;
pub use style_rule::{StyleMap, StyleRule};
pub use theme::ProjectTheme;
