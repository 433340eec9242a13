use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "$";

/// Configuration for stocka, stored in <data dir>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockaConfig {
    /// Currency symbol prefixed to prices in listings (e.g., "$", "€", "₹")
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for StockaConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl StockaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockaConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get_currency(&self) -> &str {
        &self.currency
    }

    /// Set the currency symbol (falls back to the default when blank)
    pub fn set_currency(&mut self, symbol: &str) {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            self.currency = DEFAULT_CURRENCY.to_string();
        } else {
            self.currency = symbol.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockaConfig::default();
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_set_currency() {
        let mut config = StockaConfig::default();
        config.set_currency("€");
        assert_eq!(config.currency, "€");
    }

    #[test]
    fn test_set_currency_blank_falls_back() {
        let mut config = StockaConfig::default();
        config.set_currency("   ");
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = StockaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, StockaConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = StockaConfig::default();
        config.set_currency("₹");
        config.save(temp_dir.path()).unwrap();

        let loaded = StockaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.currency, "₹");
    }
}
