use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub account: AccountSettings,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct AccountSettings {
    #[serde(default)]
    pub customer_guid: String,
    #[serde(default = "default_cluster_name")]
    pub cluster_name: String,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            customer_guid: String::new(),
            cluster_name: default_cluster_name(),
        }
    }
}

fn default_cluster_name() -> String {
    "default".to_string()
}

fn settings_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/kubecomply/settings.toml"))
}

/// Load the local settings file; an absent file means defaults.
pub fn load_settings() -> anyhow::Result<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
