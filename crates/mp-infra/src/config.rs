//! Portal configuration.
//!
//! Backend endpoint and local state directory, with defaults that can be
//! overridden from the environment (`PORTAL_API_BASE_URL`,
//! `PORTAL_STATE_DIR`).

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the backend RPC surface.
    pub api_base_url: String,
    /// Directory holding the persisted wizard slot.
    pub state_dir: PathBuf,
}

impl PortalConfig {
    pub fn defaults() -> Self {
        let state_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("merchant-portal");
        Self {
            api_base_url: "https://api.portal.local".to_string(),
            state_dir,
        }
    }

    /// Load configuration: defaults overridden by `PORTAL_*` environment
    /// variables.
    pub fn load() -> anyhow::Result<Self> {
        let defaults = Self::defaults();
        let config = config::Config::builder()
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("state_dir", defaults.state_dir.to_string_lossy().to_string())?
            .add_source(config::Environment::with_prefix("PORTAL"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_portal_state_dir() {
        let config = PortalConfig::defaults();
        assert!(config.api_base_url.starts_with("https://"));
        assert!(config.state_dir.ends_with("merchant-portal"));
    }
}
