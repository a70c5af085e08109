use crate::{Error, Result};
use beanshelf_providers::Endpoints;
use beanshelf_providers::endpoints::{DEFAULT_PRIMARY, DEFAULT_SECONDARY, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BEANSHELF_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.beanshelf
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("BEANSHELF_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("beanshelf"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".beanshelf"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub primary: String,
    pub secondary: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Replace individual endpoint settings, e.g. from command-line flags
    pub fn with_overrides(
        mut self,
        primary: Option<String>,
        secondary: Option<String>,
        timeout_ms: Option<u64>,
    ) -> Result<Self> {
        if let Some(primary) = primary {
            self.endpoints.primary = primary;
        }
        if let Some(secondary) = secondary {
            self.endpoints.secondary = secondary;
        }
        if let Some(timeout_ms) = timeout_ms {
            self.endpoints.timeout_ms = timeout_ms;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.endpoints.primary, &self.endpoints.secondary)
            .with_timeout(Duration::from_millis(self.endpoints.timeout_ms))
    }

    fn validate(&self) -> Result<()> {
        if self.endpoints.timeout_ms == 0 {
            return Err(Error::Config("timeout_ms must be greater than 0".to_string()));
        }
        for (name, url) in [
            ("primary", &self.endpoints.primary),
            ("secondary", &self.endpoints.secondary),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::Config(format!(
                    "{} endpoint must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.endpoints.timeout_ms, 15_000);
        assert_eq!(config.endpoints().timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let config = Config::default().with_overrides(
            Some("https://beans.example".to_string()),
            None,
            Some(5_000),
        )?;
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.endpoints().collection_url(), "https://beans.example/api/beans");

        Ok(())
    }

    #[test]
    fn test_config_missing_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(loaded, Config::default());
        Ok(())
    }

    #[test]
    fn test_config_timeout_defaults_when_omitted() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[endpoints]\nprimary = \"http://a.test\"\nsecondary = \"http://b.test\"\n",
        )?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.endpoints.timeout_ms, 15_000);
        Ok(())
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(
            Config::default()
                .with_overrides(Some("ftp://beans".to_string()), None, None)
                .is_err()
        );
        assert!(Config::default().with_overrides(None, None, Some(0)).is_err());
    }

    #[test]
    fn test_explicit_path_expands_tilde() {
        let resolved = resolve_workspace_path(Some("/tmp/beans")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/beans"));
    }
}
