use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::gateway::{self, GatewayTemplate};

/// Global configuration loaded from `~/.config/ordhash/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdhashConfig {
    /// Total per-gateway timeout in seconds (connect + transfer).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Gateway URL templates with an `{id}` placeholder, tried strictly
    /// in this order.
    #[serde(default = "default_gateway_strings")]
    pub gateways: Vec<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_gateway_strings() -> Vec<String> {
    gateway::DEFAULT_GATEWAYS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for OrdhashConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            gateways: default_gateway_strings(),
        }
    }
}

impl OrdhashConfig {
    /// Per-gateway timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured gateway templates in fallback order.
    pub fn gateway_templates(&self) -> Vec<GatewayTemplate> {
        self.gateways.iter().map(GatewayTemplate::new).collect()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ordhash")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OrdhashConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OrdhashConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OrdhashConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = OrdhashConfig::default();
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
        assert_eq!(cfg.gateways.len(), 3);
        assert!(cfg.gateways[0].contains("ordinals.com"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = OrdhashConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: OrdhashConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
        assert_eq!(parsed.gateways, cfg.gateways);
    }

    #[test]
    fn config_toml_custom_gateways_keep_order() {
        let toml = r#"
            timeout_secs = 5
            gateways = [
                "http://mirror-b.example/content/{id}",
                "http://mirror-a.example/content/{id}",
            ]
        "#;
        let cfg: OrdhashConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.timeout_secs, 5);
        let templates = cfg.gateway_templates();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].host().as_deref(), Some("mirror-b.example"));
        assert_eq!(templates[1].host().as_deref(), Some("mirror-a.example"));
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: OrdhashConfig = toml::from_str("timeout_secs = 10").unwrap();
        assert_eq!(cfg.timeout_secs, 10);
        assert_eq!(cfg.gateways.len(), 3);

        let cfg: OrdhashConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.timeout_secs, 30);
    }
}
