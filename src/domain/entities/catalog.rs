//! ThemeCatalog - the ordered collection of available themes
//!
//! Built-in themes are defined once at process start. User-defined themes
//! can be layered on top from a theme-library file (TOML or JSON),
//! discovered through the shared configuration.

use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::domain::entities::theme::ProjectTheme;
use crate::domain::errors::DomainError;

/// Ordered collection of theme definitions
#[derive(Clone, Debug, Default)]
pub struct ThemeCatalog {
    themes: Vec<ProjectTheme>,
}

/// On-disk theme library layout (TOML)
#[derive(Debug, Deserialize)]
struct ThemeLibraryFile {
    #[serde(default)]
    themes: Vec<ProjectTheme>,
}

impl ThemeCatalog {
    /// The built-in catalog, constructed once at process start
    pub fn builtin() -> &'static ThemeCatalog {
        static CATALOG: OnceLock<ThemeCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| ThemeCatalog {
            themes: builtin_themes(),
        })
    }

    /// Create a catalog from an explicit theme list
    pub fn with_themes(themes: Vec<ProjectTheme>) -> Self {
        Self { themes }
    }

    /// All themes, in catalog order
    pub fn themes(&self) -> &[ProjectTheme] {
        &self.themes
    }

    /// Look up a theme by its identifier
    pub fn find(&self, id: &str) -> Option<&ProjectTheme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Number of themes in the catalog
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Built-ins plus user themes from the discovered library file.
    ///
    /// A missing or unreadable library degrades to built-ins only; a
    /// user theme with a built-in id overrides the built-in definition.
    pub fn load_default() -> ThemeCatalog {
        let mut catalog = Self::builtin().clone();

        if let Some(path) = crate::shared::config::ThemeLibraryConfig::load().library_path() {
            match Self::load_library(&path) {
                Ok(custom) => {
                    for theme in custom {
                        catalog.upsert(theme);
                    }
                }
                Err(e) => {
                    log!("ThemeCatalog::load_default - skipping library: {}", e);
                }
            }
        }

        catalog
    }

    /// Load themes from a library file (`.toml` or `.json`)
    pub fn load_library(path: &Path) -> Result<Vec<ProjectTheme>, DomainError> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str::<Vec<ProjectTheme>>(&content)
                .map_err(|e| DomainError::ParseError(e.to_string())),
            _ => toml::from_str::<ThemeLibraryFile>(&content)
                .map(|f| f.themes)
                .map_err(|e| DomainError::ParseError(e.to_string())),
        }
    }

    /// Add a theme, replacing any existing theme with the same id
    pub fn upsert(&mut self, theme: ProjectTheme) {
        match self.themes.iter_mut().find(|t| t.id == theme.id) {
            Some(existing) => *existing = theme,
            None => self.themes.push(theme),
        }
    }
}

fn theme(
    id: &str,
    name: &str,
    description: &str,
    palette: [&str; 11],
) -> ProjectTheme {
    let [background, text, primary, secondary, surface, surface_text, border, button_primary, button_primary_text, button_secondary, button_secondary_text] =
        palette.map(str::to_string);
    ProjectTheme {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        background,
        text,
        primary,
        secondary,
        surface,
        surface_text,
        border,
        button_primary,
        button_primary_text,
        button_secondary,
        button_secondary_text,
    }
}

/// The shipped palettes, in picker order
fn builtin_themes() -> Vec<ProjectTheme> {
    vec![
        theme(
            "minimal-light",
            "Minimal Light",
            "Clean white canvas with indigo accents",
            [
                "#ffffff", "#111827", "#4f46e5", "#7c3aed", "#f9fafb", "#111827", "#e5e7eb",
                "#4f46e5", "#ffffff", "#ffffff", "#111827",
            ],
        ),
        theme(
            "midnight",
            "Midnight",
            "Deep slate background with soft indigo",
            [
                "#0f172a", "#e2e8f0", "#6366f1", "#8b5cf6", "#1e293b", "#f1f5f9", "#334155",
                "#6366f1", "#ffffff", "#1e293b", "#e2e8f0",
            ],
        ),
        theme(
            "ocean",
            "Ocean",
            "Cool blues on a near-white page",
            [
                "#f0f9ff", "#0c4a6e", "#0284c7", "#06b6d4", "#ffffff", "#0c4a6e", "#bae6fd",
                "#0284c7", "#ffffff", "#e0f2fe", "#0c4a6e",
            ],
        ),
        theme(
            "forest",
            "Forest",
            "Muted greens with warm parchment",
            [
                "#f7f5ef", "#1c2b1f", "#166534", "#4d7c0f", "#ffffff", "#1c2b1f", "#d6d3c4",
                "#166534", "#ffffff", "#e8e6dc", "#1c2b1f",
            ],
        ),
        theme(
            "sunset",
            "Sunset",
            "Warm dark canvas with amber accents",
            [
                "#1c1210", "#fef3c7", "#f59e0b", "#f97316", "#2b1d18", "#fffbeb", "#44302a",
                "#f59e0b", "#1c1210", "#2b1d18", "#fef3c7",
            ],
        ),
        theme(
            "slate",
            "Slate",
            "Neutral grays for content-first pages",
            [
                "#f8fafc", "#0f172a", "#475569", "#64748b", "#ffffff", "#0f172a", "#cbd5e1",
                "#475569", "#ffffff", "#e2e8f0", "#0f172a",
            ],
        ),
    ]
}
