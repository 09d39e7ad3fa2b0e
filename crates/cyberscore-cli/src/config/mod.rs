//! Configuration management.

use anyhow::{Context as _, Result};
use cyberscore_core::password::validate_length;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CYBERSCORE_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Show helpful tips after commands.
    #[serde(default = "default_true")]
    pub show_tips: bool,

    /// Always show explanations (as if --explain was passed).
    #[serde(default)]
    pub explain_by_default: bool,

    /// Length used by `password generate` without --length.
    #[serde(default = "default_password_length")]
    pub password_length: usize,
}

const fn default_true() -> bool {
    true
}

const fn default_password_length() -> usize {
    cyberscore_core::password::DEFAULT_GENERATED_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: None,
            show_tips: true,
            explain_by_default: false,
            password_length: default_password_length(),
        }
    }
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("org", "cyberscore", "cyberscore")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Set a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "show_tips" => self.show_tips = value.parse()?,
            "explain_by_default" | "explain" => self.explain_by_default = value.parse()?,
            "password_length" => {
                let length: usize = value.parse()?;
                validate_length(length)?;
                self.password_length = length;
            }
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     output_format      - Default output format (pretty/json/csv/yaml)\n  \
                     show_tips          - Show helpful tips (true/false)\n  \
                     explain_by_default - Always explain commands (true/false)\n  \
                     password_length    - Default generated password length",
                    key
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str("output_format = \"json\"\n").unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert!(config.show_tips);
        assert_eq!(config.password_length, 12);
    }

    #[test]
    fn set_known_keys() {
        let mut config = Config::default();
        config.set("output", "yaml").unwrap();
        config.set("password_length", "20").unwrap();
        config.set("explain", "true").unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Yaml));
        assert_eq!(config.password_length, 20);
        assert!(config.explain_by_default);
    }

    #[test]
    fn set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("api_key", "x").is_err());
        assert!(config.set("password_length", "2").is_err());
        assert!(config.set("password_length", "100000000000").is_err());
        assert_eq!(config.password_length, 12);
        assert!(config.set("show_tips", "maybe").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.output_format = Some(OutputFormat::Csv);
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
