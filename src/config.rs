use crate::format::format_currency;
use crate::page::{anchor_scroll_target, should_fade_in, NavbarStyle};
use crate::validation::{ValidationMessages, DEFAULT_MIN_PHONE_DIGITS};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the location of `config.toml`.
pub const CONFIG_ENV: &str = "CLEANBOOK_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub messages: ValidationMessages,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_phone_digits: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { min_phone_digits: DEFAULT_MIN_PHONE_DIGITS }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub currency_symbol: String,
    /// Scroll offset in pixels past which the navbar switches style.
    pub navbar_scroll_threshold: f64,
    /// Height of the fixed navbar subtracted from anchor scroll targets.
    pub navbar_offset: f64,
    /// Intersection ratio at which observed sections fade in.
    pub fade_in_threshold: f64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            navbar_scroll_threshold: 50.0,
            navbar_offset: 80.0,
            fade_in_threshold: 0.1,
        }
    }
}

impl PresentationConfig {
    pub fn format_price(&self, amount: f64) -> Option<String> {
        format_currency(amount, &self.currency_symbol)
    }

    pub fn navbar_style(&self, scroll_offset: f64) -> NavbarStyle {
        NavbarStyle::for_scroll(scroll_offset, self.navbar_scroll_threshold)
    }

    pub fn anchor_target(&self, element_top: f64) -> f64 {
        anchor_scroll_target(element_top, self.navbar_offset)
    }

    pub fn fades_in(&self, intersection_ratio: f64) -> bool {
        should_fade_in(intersection_ratio, self.fade_in_threshold)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    /// Load from `path`, writing the defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let default_config = Config::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "cleanbook", "cleanbook")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.validation.min_phone_digits, 10);
        assert_eq!(config.messages.required, "This field is required");
        assert_eq!(config.presentation.currency_symbol, "$");
        assert_eq!(config.presentation.navbar_scroll_threshold, 50.0);
    }

    #[test]
    fn test_presentation_settings_drive_page_helpers() {
        let presentation = PresentationConfig {
            currency_symbol: "£".to_string(),
            ..PresentationConfig::default()
        };
        assert_eq!(presentation.format_price(1500.0).as_deref(), Some("£1,500.00"));
        assert_eq!(presentation.navbar_style(10.0), NavbarStyle::Transparent);
        assert_eq!(presentation.navbar_style(120.0), NavbarStyle::Scrolled);
        assert_eq!(presentation.anchor_target(500.0), 420.0);
        assert!(presentation.fades_in(0.25));
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.validation.min_phone_digits = 7;
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_config_load_creates_defaults() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");

        let loaded = Config::load_from(&config_path)?;
        assert!(config_path.exists());
        assert_eq!(loaded, Config::default());

        Ok(())
    }

    #[test]
    fn test_config_partial_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[validation]\nmin_phone_digits = 11\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.validation.min_phone_digits, 11);
        assert_eq!(loaded.presentation, PresentationConfig::default());

        Ok(())
    }
}
