//! Configuration management for CCDB connection settings and paths.

use std::{
   fs,
   path::{Path, PathBuf},
   sync::OnceLock,
};

use directories::BaseDirs;
use figment::{
   Figment,
   providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

static CONFIG: OnceLock<Config> = OnceLock::new();

pub const HTTP_TIMEOUT_MS_CAP: u64 = 600_000;
pub const DEFAULT_CCDB_URL: &str = "http://localhost:8080";

/// Application configuration loaded from config file and environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
   pub ccdb_url: String,

   pub http_timeout_ms:         u64,
   pub http_connect_timeout_ms: u64,
}

impl Default for Config {
   fn default() -> Self {
      Self {
         ccdb_url: DEFAULT_CCDB_URL.to_string(),
         http_timeout_ms: 60_000,
         http_connect_timeout_ms: 5_000,
      }
   }
}

impl Config {
   pub fn load() -> Self {
      let config_path = ensure_global_config();

      Figment::from(Serialized::defaults(Self::default()))
         .merge(Toml::file(config_path))
         .merge(Env::prefixed("REPOCLEAN_").lowercase(true))
         .extract()
         .inspect_err(|e| tracing::warn!("failed to parse config: {e}"))
         .unwrap_or_default()
   }

   fn create_default_config(path: &Path) {
      if let Some(parent) = path.parent() {
         let _ = fs::create_dir_all(parent);
      }
      let default_config = Self::default();
      if let Ok(toml) = toml::to_string_pretty(&default_config) {
         let _ = fs::write(path, toml);
      }
   }

   /// Base URL of the CCDB server with any trailing slash removed.
   pub fn ccdb_url(&self) -> &str {
      self.ccdb_url.trim_end_matches('/')
   }
}

pub fn validate(cfg: &Config) -> Result<()> {
   if cfg.ccdb_url.trim().is_empty() {
      return Err(ConfigError::InvalidConfig("ccdb_url must not be empty".to_string()).into());
   }
   if cfg.http_timeout_ms == 0 {
      return Err(ConfigError::InvalidConfig("http_timeout_ms must be non-zero".to_string()).into());
   }
   if cfg.http_timeout_ms > HTTP_TIMEOUT_MS_CAP {
      return Err(
         ConfigError::InvalidConfig(format!(
            "http_timeout_ms {} exceeds hard cap {}",
            cfg.http_timeout_ms, HTTP_TIMEOUT_MS_CAP
         ))
         .into(),
      );
   }
   if cfg.http_connect_timeout_ms == 0 {
      return Err(
         ConfigError::InvalidConfig("http_connect_timeout_ms must be non-zero".to_string()).into(),
      );
   }
   Ok(())
}

/// Returns the global configuration instance
pub fn get() -> &'static Config {
   CONFIG.get_or_init(Config::load)
}

/// Returns the base directory for repoclean configuration
pub fn base_dir() -> &'static PathBuf {
   static ONCE: OnceLock<PathBuf> = OnceLock::new();
   ONCE.get_or_init(|| resolve_base_dir(".repoclean"))
}

fn ensure_global_config() -> PathBuf {
   let config_path = config_file_path();
   if !config_path.exists() {
      Config::create_default_config(config_path);
   }
   config_path.to_path_buf()
}

fn resolve_base_dir(dir_name: &str) -> PathBuf {
   BaseDirs::new()
      .map(|d| d.home_dir().join(dir_name))
      .or_else(|| {
         std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join(dir_name))
      })
      .unwrap_or_else(|| {
         std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(dir_name)
      })
}

pub fn config_file_path() -> &'static PathBuf {
   static ONCE: OnceLock<PathBuf> = OnceLock::new();
   ONCE.get_or_init(|| base_dir().join("config.toml"))
}
