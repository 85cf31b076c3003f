//! ListThemesUseCase - catalog entries for a host theme picker

use crate::application::dto::ThemeDto;
use crate::domain::entities::catalog::ThemeCatalog;
use crate::domain::entities::theme::ProjectTheme;
use crate::domain::errors::DomainError;

/// Read-only catalog workflow for host UIs
pub struct ListThemesUseCase {
    catalog: ThemeCatalog,
}

impl ListThemesUseCase {
    /// Use the built-in catalog plus any configured user theme library
    pub fn new() -> Self {
        Self {
            catalog: ThemeCatalog::load_default(),
        }
    }

    /// Use an explicit catalog (tests, embedded hosts)
    pub fn with_catalog(catalog: ThemeCatalog) -> Self {
        Self { catalog }
    }

    /// Picker entries, in catalog order
    pub fn execute(&self) -> Vec<ThemeDto> {
        self.catalog.themes().iter().map(ThemeDto::from).collect()
    }

    /// Resolve a picked id back to the full theme
    pub fn find(&self, id: &str) -> Result<ProjectTheme, DomainError> {
        self.catalog
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::ThemeNotFound(id.to_string()))
    }
}

impl Default for ListThemesUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_catalog_in_order() {
        let use_case = ListThemesUseCase::with_catalog(ThemeCatalog::builtin().clone());
        let entries = use_case.execute();

        assert_eq!(entries.len(), ThemeCatalog::builtin().len());
        assert_eq!(entries[0].id, "minimal-light");
        assert!(!entries[0].background.is_empty());
    }

    #[test]
    fn test_find_resolves_picked_id() {
        let use_case = ListThemesUseCase::with_catalog(ThemeCatalog::builtin().clone());

        assert_eq!(use_case.find("midnight").unwrap().id, "midnight");
        assert!(matches!(
            use_case.find("nope"),
            Err(DomainError::ThemeNotFound(_))
        ));
    }
}
