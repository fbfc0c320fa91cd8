// GUI configuration module
pub mod theme;

use anyhow::{Context, Result};
use calculator::CalculatorSettings;
use serde::Deserialize;
use shared::utils::currency_format::CurrencyFormat;
use std::path::Path;

use theme::Theme;

/// Environment variable naming a JSON file that replaces the embedded defaults.
pub const CONFIG_PATH_ENV: &str = "WESPLIT_CONFIG";

// Mirrors assets/config/default.json
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub currency: CurrencySettings,
    #[serde(default)]
    pub calculator: CalculatorSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub theme: Theme,
    pub window_width: u32,
    pub window_height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CurrencySettings {
    // "auto" or a locale tag such as "pt_BR"
    pub locale: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            locale: "auto".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str).context("embedded default configuration is invalid")
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json(&config_str)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Uses the file named by `WESPLIT_CONFIG` when set, the embedded defaults otherwise.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => {
                tracing::info!("Loading configuration from {:?}", path);
                Self::load_from_path(path)
            }
            _ => Self::load_default(),
        }
    }

    fn from_json(config_str: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.calculator.validate()?;
        Ok(config)
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        let locale = if self.currency.locale.eq_ignore_ascii_case("auto") {
            detect_locale()
        } else {
            self.currency.locale.clone()
        };
        let format = CurrencyFormat::for_locale(&locale);
        tracing::debug!("Locale {} formats amounts as {}", locale, format.code);
        format
    }
}

// Same precedence as setlocale(3) for LC_MONETARY
fn detect_locale() -> String {
    ["LC_ALL", "LC_MONETARY", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "en_US".to_string())
}
