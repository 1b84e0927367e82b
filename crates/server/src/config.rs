use std::path::Path;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Read from the `bind_addr` key, `APP__BIND_ADDR` or `SERVER_BIND`.
    #[serde(rename = "bind_addr")]
    pub server_bind: String,
    /// Path or `http(s)` URL of the movie catalog document.
    pub catalog_source: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            catalog_source: "movies.json".into(),
        }
    }
}

/// Defaults, then `server.toml`, then `APP__*` variables, then the plain
/// `SERVER_BIND` / `CATALOG_SOURCE` variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = load_settings_from(Path::new(SETTINGS_FILE))?;
    Ok(apply_legacy_env(settings, |key| std::env::var(key).ok()))
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    let defaults = Settings::default();
    let settings = Config::builder()
        .set_default("bind_addr", defaults.server_bind)?
        .set_default("catalog_source", defaults.catalog_source)?
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()
        .with_context(|| format!("failed to read settings from '{}'", path.display()))?
        .try_deserialize::<Settings>()
        .context("invalid server settings")?;
    Ok(settings)
}

fn apply_legacy_env(mut settings: Settings, lookup: impl Fn(&str) -> Option<String>) -> Settings {
    if let Some(v) = lookup("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = lookup("CATALOG_SOURCE") {
        settings.catalog_source = v;
    }
    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
