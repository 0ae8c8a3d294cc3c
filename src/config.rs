use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use std::path::Path;

use crate::utils::{HexDumpOptions, PadSide};

pub const DEFAULT_CONFIG_FILE: &str = "oidkit.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Byte used by `pad` and `trim` when none is given
    pub padding_byte: u8,
    /// End `pad` and `trim` work on when none is given
    pub pad_side: PadSide,
    pub hexdump: HexDumpOptions,
}

impl KitConfig {
    /// Read the config file if it exists, otherwise fall back to defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config_file = config_path.unwrap_or(DEFAULT_CONFIG_FILE);

        if Path::new(config_file).exists() {
            let content = std::fs::read_to_string(config_file)
                .with_context(|| format!("reading {}", config_file))?;
            let config: KitConfig = toml::from_str(&content)
                .with_context(|| format!("parsing {}", config_file))?;
            tracing::debug!("Loaded config from {}", config_file);
            Ok(config)
        } else if config_path.is_some() {
            anyhow::bail!("config file not found: {}", config_file)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        tracing::info!("Wrote config to {}", config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: KitConfig = toml::from_str("").unwrap();
        assert_eq!(config, KitConfig::default());
        assert_eq!(config.hexdump.bytes_per_line, 8);
        assert_eq!(config.pad_side, PadSide::Front);
    }

    #[test]
    fn partial_file_overrides_fields() {
        let config: KitConfig = toml::from_str(
            "padding_byte = 255\npad_side = \"end\"\n[hexdump]\ndelimiter = \":\"\n",
        )
        .unwrap();
        assert_eq!(config.padding_byte, 0xFF);
        assert_eq!(config.pad_side, PadSide::End);
        assert_eq!(config.hexdump.delimiter, ':');
        assert_eq!(config.hexdump.bytes_per_line, 8);
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!("oidkit-config-{}.toml", std::process::id()));
        let path = path.to_string_lossy().to_string();

        let mut config = KitConfig::default();
        config.hexdump.bytes_per_line = 16;
        config.pad_side = PadSide::End;
        config.save(&path).unwrap();

        assert_eq!(KitConfig::load(Some(&path)).unwrap(), config);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unknown_pad_side_is_rejected() {
        assert!(toml::from_str::<KitConfig>("pad_side = \"middle\"\n").is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        assert!(KitConfig::load(Some("/nonexistent/oidkit.toml")).is_err());
    }
}
