//! Use Cases - single-purpose host-facing workflows

pub mod list_themes;

pub use list_themes::ListThemesUseCase;
