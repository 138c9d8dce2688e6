//! Application configuration loaded from a TOML file.
//!
//! An explicitly passed configuration path must exist; otherwise the
//! platform config directory is probed (`deckforge/config.toml`) and silently
//! skipped when absent.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;

use deckforge::color::Color;

use crate::CliError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output path overrides
    #[serde(default)]
    pub output: OutputConfig,

    /// Theme overrides
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Output path overrides
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Where the generator writes the deck SVG
    pub deck: Option<PathBuf>,

    /// Which design document the patch utility edits
    pub document: Option<PathBuf>,
}

/// Theme overrides
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    /// Accent color as a CSS color string
    pub accent: Option<Color>,
}

impl AppConfig {
    /// Builds the deck theme, applying any configured overrides.
    pub fn theme(&self) -> deckforge::theme::Theme {
        let mut theme = deckforge::theme::Theme::default();
        if let Some(accent) = &self.theme.accent {
            theme = theme.with_accent(accent.clone());
        }
        theme
    }
}

/// Loads configuration from the given path, or from the default location
/// when no path is passed.
pub fn load_config(explicit: Option<&String>) -> Result<AppConfig, CliError> {
    match explicit {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(CliError::MissingConfig(path.to_path_buf()));
            }
            load_file(path)
        }
        None => match default_config_path() {
            Some(path) if path.exists() => load_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(AppConfig::default())
            }
        },
    }
}

fn load_file(path: &Path) -> Result<AppConfig, CliError> {
    debug!(path:?; "Loading configuration");
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "deckforge")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let missing = String::from("/definitely/not/here/config.toml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(matches!(err, CliError::MissingConfig(_)));
    }

    #[test]
    fn test_parses_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[output]
deck = "out/deck.svg"

[theme]
accent = "#ff00ff"
"##,
        )
        .unwrap();

        let config = load_config(Some(&path.to_string_lossy().to_string())).unwrap();
        assert_eq!(
            config.output.deck.as_deref(),
            Some(Path::new("out/deck.svg"))
        );
        assert!(config.theme.accent.is_some());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid").unwrap();

        let err = load_config(Some(&path.to_string_lossy().to_string())).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }
}
