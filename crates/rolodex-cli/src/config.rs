//! Configuration for the Rolodex CLI.
//!
//! Provides the [`RolodexConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `ROLODEX_CONFIG` environment variable
//! 3. XDG default: `~/.config/rolodex/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;

use confyg::{Confygery, env};
use rolodex_core::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Rolodex CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RolodexConfig {
    /// Base path for data files; defaults to the working directory.
    pub base_path: Option<String>,

    /// Store-related configuration.
    pub store: StoreConfig,
}

/// User-store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the JSON user store.
    pub path: Option<String>,
}

// ============================================================================
// Config loading
// ============================================================================

impl RolodexConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `ROLODEX_CONFIG` env var
    /// 3. XDG default: `~/.config/rolodex/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("ROLODEX");
        env_opts.add_section("store");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG
    /// default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. ROLODEX_CONFIG env var
        if let Ok(path) = std::env::var("ROLODEX_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rolodex").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Resolve the backing store path.
    ///
    /// Explicit `store.path` wins; otherwise `data/users.json` under the
    /// base path (or the working directory when no base path is set).
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store.path {
            return Ok(PathBuf::from(path));
        }
        let base = match &self.base_path {
            Some(base) => PathBuf::from(base),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("could not determine base path: {e}")))?,
        };
        Ok(base.join("data").join("users.json"))
    }
}

// ============================================================================
// Tests
// ============================================================================
