use crate::wedding::WeddingData;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const BACKEND_URL_VAR: &str = "VIVAH_BACKEND_URL";
pub const BACKEND_KEY_VAR: &str = "VIVAH_BACKEND_KEY";
pub const CONFIG_PATH_VAR: &str = "VIVAH_CONFIG_PATH";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub wedding: WeddingData,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Origin the invitation is served from; share links are built on it
    pub base_url: String,
    /// Address the API server binds to
    pub listen_addr: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            listen_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BackendConfig {
    pub url: Option<String>,
    /// Public (anon) API key. Usually supplied through the environment instead.
    #[serde(default, skip_serializing)]
    pub anon_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            backend: BackendConfig::default(),
            wedding: WeddingData::default(),
        }
    }
}

impl Config {
    /// Load from `VIVAH_CONFIG_PATH` or the per-user config directory.
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&resolve_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            debug!("No config at {}, using defaults", path.display());
            Config::default()
        };
        config.apply_env_overrides();
        info!("Configuration loaded for {}", config.wedding.couple());
        Ok(config)
    }

    /// Save to the same file `load` reads.
    pub fn save(&self) -> Result<PathBuf> {
        let path = resolve_config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_var(BACKEND_URL_VAR) {
            self.backend.url = Some(url);
        }
        if let Some(key) = non_empty_var(BACKEND_KEY_VAR) {
            self.backend.anon_key = Some(key);
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "vivah", "vivah")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// The config file every command uses: `VIVAH_CONFIG_PATH` when set, otherwise
/// the per-user config directory.
pub fn resolve_config_path() -> Result<PathBuf> {
    config_path_from(env::var(CONFIG_PATH_VAR).ok())
}

fn config_path_from(env_value: Option<String>) -> Result<PathBuf> {
    match env_value {
        Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path.trim())),
        _ => get_config_path(),
    }
}

/// Load `.env` from the working directory if there is one.
pub fn load_env_file() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
}
