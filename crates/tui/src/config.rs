use std::fs::File;

use anyhow::{anyhow, Context, Result};
use coursebook_client::DEFAULT_BASE;
use log::debug;
use serde::Deserialize;
use xdg::BaseDirectories;

/// On-disk settings. Every field has a default, so the file is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the course catalog API.
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_BASE.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = BaseDirectories::with_prefix("coursebook")?
            .find_config_file("config.json")
            .ok_or_else(|| anyhow!("config does not exist"))?;

        let file = File::open(&path).context("error opening config file")?;
        let config = serde_json::from_reader(&file).context("error deserialising config file")?;

        Ok(config)
    }

    /// Load the config, falling back to defaults when there isn't one.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(c) => c,
            Err(e) => {
                debug!("using default config: {:?}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_base, DEFAULT_BASE);
    }

    #[test]
    fn api_base_can_be_overridden() {
        let config: Config =
            serde_json::from_str(r#"{"api_base": "https://courses.example.org/"}"#).unwrap();
        assert_eq!(config.api_base, "https://courses.example.org/");
    }
}
