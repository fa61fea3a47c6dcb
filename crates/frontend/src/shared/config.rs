use anyhow::Context;
use contracts::enums::TabId;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub url: String,
    pub refresh_interval_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            url: "/data/game_data.json".to_string(),
            refresh_interval_secs: 300,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TabsConfig {
    pub character_enabled: bool,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[data]
url = "/data/game_data.json"
refresh_interval_secs = 300

[tabs]
character_enabled = false
"#;

/// `config.toml` next to the crate manifest, bundled at build time
const BUNDLED_CONFIG: &str = include_str!("../../config.toml");

impl AppConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.data.refresh_interval_secs)
    }

    /// Tabs shown in the tab strip, in display order
    pub fn enabled_tabs(&self) -> Vec<TabId> {
        TabId::ALL
            .into_iter()
            .filter(|tab| !tab.is_optional() || self.is_optional_enabled(*tab))
            .collect()
    }

    fn is_optional_enabled(&self, tab: TabId) -> bool {
        match tab {
            TabId::Character => self.tabs.character_enabled,
            _ => true,
        }
    }
}

/// Parse and validate a TOML config document
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).context("invalid config.toml")?;
    if config.data.refresh_interval_secs == 0 {
        anyhow::bail!("data.refresh_interval_secs must be greater than zero");
    }
    if config.data.url.trim().is_empty() {
        anyhow::bail!("data.url must not be empty");
    }
    Ok(config)
}

/// Load the bundled configuration.
///
/// Falls back to the embedded default if the bundled file is invalid.
pub fn load_config() -> AppConfig {
    match parse_config(BUNDLED_CONFIG) {
        Ok(config) => {
            log::info!("Loaded bundled config: data url '{}'", config.data.url);
            config
        }
        Err(e) => {
            log::warn!("{:#}; using default embedded configuration", e);
            parse_config(DEFAULT_CONFIG).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.refresh_interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_bundled_config_loads() {
        assert!(parse_config(BUNDLED_CONFIG).is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[tabs]\ncharacter_enabled = true\n").unwrap();
        assert_eq!(config.data, DataConfig::default());
        assert!(config.tabs.character_enabled);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = parse_config("[data]\nrefresh_interval_secs = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_character_tab_hidden_by_default() {
        let tabs = AppConfig::default().enabled_tabs();
        assert_eq!(tabs.len(), 13);
        assert_eq!(tabs.first(), Some(&TabId::Production));
        assert!(!tabs.contains(&TabId::Character));
    }

    #[test]
    fn test_character_tab_enabled() {
        let config = parse_config("[tabs]\ncharacter_enabled = true\n").unwrap();
        let tabs = config.enabled_tabs();
        assert_eq!(tabs.len(), 14);
        assert_eq!(tabs.first(), Some(&TabId::Character));
    }
}
