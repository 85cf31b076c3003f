//! Application Services - orchestration over the document port

pub mod rule_manager;
pub mod theme_engine;

pub use theme_engine::{ActiveThemeSlot, ThemeEngine};
