//! ThemeDto - Data transfer object for theme picker entries

use crate::domain::entities::theme::ProjectTheme;

/// DTO for listing themes in a host picker
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDto {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Swatch pair hosts preview the theme with
    pub background: String,
    pub primary: String,
}

impl From<&ProjectTheme> for ThemeDto {
    fn from(theme: &ProjectTheme) -> Self {
        Self {
            id: theme.id.clone(),
            name: theme.name.clone(),
            description: theme.description.clone(),
            background: theme.background.clone(),
            primary: theme.primary.clone(),
        }
    }
}

impl From<ProjectTheme> for ThemeDto {
    fn from(theme: ProjectTheme) -> Self {
        Self::from(&theme)
    }
}
