//! Library Configuration
//!
//! Points the catalog at an optional user theme-library file. Loaded
//! from `pagetheme.toml`; a missing or unreadable config degrades to
//! defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration loaded from pagetheme.toml
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ThemeLibraryConfig {
    /// Theme library section
    #[serde(default)]
    pub themes: ThemesSection,
}

/// Theme library settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemesSection {
    /// Whether user themes are loaded at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Path to a theme-library file (.toml or .json)
    #[serde(default)]
    pub library: Option<PathBuf>,
}

impl Default for ThemesSection {
    fn default() -> Self {
        Self {
            enabled: true,
            library: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl ThemeLibraryConfig {
    /// Find pagetheme.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("pagetheme").join("pagetheme.toml")),
            Some(PathBuf::from("pagetheme.toml")),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Load configuration, returning defaults if not found
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_path() {
            Self::load_from_path(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ThemeLibraryConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// The theme-library path, if user themes are enabled and configured
    pub fn library_path(&self) -> Option<PathBuf> {
        if self.themes.enabled {
            self.themes.library.clone()
        } else {
            None
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::ParseError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_empty() {
        let config = ThemeLibraryConfig::default();
        assert!(config.themes.enabled);
        assert_eq!(config.library_path(), None);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
            [themes]
            enabled = true
            library = "/home/user/themes.toml"
            "#
        )
        .unwrap();

        let config = ThemeLibraryConfig::load_from_path(&file.path().to_path_buf()).unwrap();
        assert_eq!(
            config.library_path(),
            Some(PathBuf::from("/home/user/themes.toml"))
        );
    }

    #[test]
    fn test_disabled_hides_library() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
            [themes]
            enabled = false
            library = "/home/user/themes.toml"
            "#
        )
        .unwrap();

        let config = ThemeLibraryConfig::load_from_path(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.library_path(), None);
    }
}
