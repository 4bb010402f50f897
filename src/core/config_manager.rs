// src/core/config_manager.rs
//! Client configuration: built-in defaults, optional `jobby.yaml`, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::utils::{read_if_found, resolve_path};

pub const DEFAULT_API_URL: &str = "https://apis.ccbp.in";
const DEFAULT_CONFIG_FILE: &str = "jobby.yaml";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_SESSION_FILE: &str = "~/.config/jobby/session.json";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub filter: String,
}

/// One environment section of `jobby.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnvironmentSection {
    pub api_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub session_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: EnvironmentSection,
    production: EnvironmentSection,
}

impl ConfigManager {
    /// Load configuration for the current environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = std::env::var("JOBBY_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let section = Self::load_section(&config_path, &environment)?;

        let mut config = Self::from_section(environment, section)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("JOBBY_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_section(path: &Path, environment: &str) -> Result<EnvironmentSection> {
        let Some(content) = read_if_found(path)? else {
            return Ok(EnvironmentSection::default());
        };

        let config_file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    /// Fill unset keys of a section with defaults
    pub fn from_section(environment: String, section: EnvironmentSection) -> Result<Self> {
        let session_path = resolve_path(
            &section
                .session_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE)),
        )?;
        let log_file = match section.log_file {
            Some(path) => resolve_path(&path)?,
            None => std::env::temp_dir().join("jobby.log"),
        };

        Ok(Self {
            environment,
            api: ApiConfig {
                base_url: section
                    .api_url
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                timeout_seconds: section.timeout_seconds,
            },
            session: SessionConfig { path: session_path },
            logging: LoggingConfig {
                file: log_file,
                filter: section
                    .log_filter
                    .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            },
        })
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("JOBBY_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(path) = std::env::var("JOBBY_SESSION_FILE") {
            self.session.path = resolve_path(Path::new(&path))?;
        }
        if let Ok(path) = std::env::var("JOBBY_LOG_FILE") {
            self.logging.file = resolve_path(Path::new(&path))?;
        }
        Ok(())
    }

    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api.base_url = url;
        }
        self
    }

    pub fn with_session_path(mut self, path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            self.session.path = resolve_path(&path)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_section() {
        let config =
            ConfigManager::from_section("local".to_string(), EnvironmentSection::default())
                .unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout_seconds, None);
        assert_eq!(config.logging.filter, "info");
        assert!(config.session.path.ends_with(".config/jobby/session.json"));
        assert!(!config.session.path.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_session_file_tilde_resolves_under_home() {
        let section = EnvironmentSection {
            session_file: Some(PathBuf::from("~/.jobby/session.json")),
            ..EnvironmentSection::default()
        };
        let config = ConfigManager::from_section("local".to_string(), section).unwrap();

        let home = PathBuf::from(shellexpand::tilde("~").into_owned());
        assert!(home.is_absolute());
        assert_eq!(config.session.path, home.join(".jobby/session.json"));
        if let Ok(home) = std::env::var("HOME") {
            assert!(config.session.path.starts_with(home));
        }
    }

    #[test]
    fn test_section_is_picked_by_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobby.yaml");
        std::fs::write(
            &path,
            "local:\n  api_url: http://localhost:8080\nproduction:\n  api_url: https://jobs.example.com\n  timeout_seconds: 15\n",
        )
        .unwrap();

        let local = ConfigManager::load_section(&path, "local").unwrap();
        assert_eq!(local.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(local.timeout_seconds, None);

        let production = ConfigManager::load_section(&path, "production").unwrap();
        assert_eq!(production.timeout_seconds, Some(15));
    }

    #[test]
    fn test_missing_file_gives_empty_section() {
        let dir = tempfile::tempdir().unwrap();
        let section = ConfigManager::load_section(&dir.path().join("none.yaml"), "local").unwrap();
        assert!(section.api_url.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let config =
            ConfigManager::from_section("local".to_string(), EnvironmentSection::default())
                .unwrap()
                .with_api_url(Some("http://127.0.0.1:3000".to_string()))
                .with_session_path(Some(PathBuf::from("/tmp/s.json")))
                .unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.session.path, PathBuf::from("/tmp/s.json"));
    }
}
