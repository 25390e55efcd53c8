//! `spm.toml` settings

use anyhow::{Context, Result};
use serde::Deserialize;
use spm_core::render::DEFAULT_BASE_FONT_SIZE;
use std::fs;
use std::path::Path;

/// Settings read from `--config`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Directory holding `Packaged_Resources/`; empty keeps paths relative
    pub asset_root: String,

    /// Font size in pixels for rendered pages and icons
    pub base_font_size: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            asset_root: String::new(),
            base_font_size: DEFAULT_BASE_FONT_SIZE,
        }
    }
}

impl CliConfig {
    /// Load settings, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        anyhow::ensure!(config.base_font_size > 0, "base_font_size must be positive");
        Ok(config)
    }

    /// Override the font size from the command line
    #[must_use]
    pub fn with_base_font_size(mut self, size: Option<u32>) -> Self {
        if let Some(size) = size {
            self.base_font_size = size;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_keys_use_defaults() {
        let config = CliConfig::from_toml("asset_root = \"/opt/spm\"").unwrap();
        assert_eq!(config.asset_root, "/opt/spm");
        assert_eq!(config.base_font_size, 20);
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(CliConfig::from_toml("base_font_size = 0").is_err());
        assert!(CliConfig::from_toml("base_font_size = -3").is_err());
        assert!(CliConfig::from_toml("font = \"x\"").is_err());
    }

    #[test]
    fn command_line_size_wins() {
        let config = CliConfig::default().with_base_font_size(Some(32));
        assert_eq!(config.base_font_size, 32);
        assert_eq!(config.with_base_font_size(None).base_font_size, 32);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spm.toml");
        fs::write(&path, "base_font_size = 24\n").unwrap();
        assert_eq!(CliConfig::load(Some(&path)).unwrap().base_font_size, 24);
        assert!(CliConfig::load(Some(&dir.path().join("none.toml"))).is_err());
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }
}
