use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BudgetConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory holding `transactions.json`
    pub dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<BudgetConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config if it exists; a missing file means defaults.
pub fn load_config(path: &Path) -> anyhow::Result<BudgetConfig> {
    if path.exists() {
        read_config(path)
    } else {
        Ok(BudgetConfig::default())
    }
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("budget"));
        }
    }
    Ok(home_dir()?.join(".config").join("budget"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("budget"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("budget"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: BudgetConfig = toml::from_str("").unwrap();
        assert!(config.storage.dir.is_none());
        assert_eq!(config.ui.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_partial_config() {
        let config: BudgetConfig = toml::from_str("[ui]\ncurrency = \"€\"\n").unwrap();
        assert_eq!(config.ui.currency, "€");
        assert!(config.storage.dir.is_none());

        let config: BudgetConfig =
            toml::from_str("[storage]\ndir = \"/tmp/budget\"\n").unwrap();
        assert_eq!(config.storage.dir.as_deref(), Some("/tmp/budget"));
        assert_eq!(config.ui.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join(format!(
            "budget_missing_config_{}.toml",
            std::process::id()
        ));
        let config = load_config(&path).unwrap();
        assert_eq!(config.ui.currency, DEFAULT_CURRENCY);
    }
}
