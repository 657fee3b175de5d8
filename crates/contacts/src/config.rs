//! Configuration loading
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: ~/.config/contacts/config.toml
//! 3. Project config: ./contacts.toml, or the file passed with `--config`
//! 4. Environment variables: `CONTACTS_*`
//! 5. CLI flags
//!
//! # Example Config
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//! database_url = "sqlite://contacts.db?mode=rwc"
//! seed = true
//! log_level = "debug"
//! ```

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Args;

const PROJECT_CONFIG: &str = "contacts.toml";

/// Resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// `SQLite` connection URL
    pub database_url: String,
    /// Insert sample contacts into an empty store at startup
    pub seed: bool,
    /// Default tracing level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            database_url: "sqlite://contacts.db?mode=rwc".to_string(),
            seed: false,
            log_level: "info".to_string(),
        }
    }
}

/// One configuration file; unset keys leave earlier layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub bind: Option<SocketAddr>,
    pub database_url: Option<String>,
    pub seed: Option<bool>,
    pub log_level: Option<String>,
}

impl Config {
    /// Overlay the keys set in a config file.
    pub fn merge(&mut self, other: PartialConfig) {
        if let Some(bind) = other.bind {
            self.bind = bind;
        }
        if let Some(url) = other.database_url {
            self.database_url = url;
        }
        if let Some(seed) = other.seed {
            self.seed = seed;
        }
        if let Some(level) = other.log_level {
            self.log_level = level;
        }
    }

    /// Apply `CONTACTS_*` overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns error if a variable holds a value of the wrong type
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("CONTACTS_BIND") {
            self.bind = value
                .parse()
                .with_context(|| format!("Invalid CONTACTS_BIND value: {value}"))?;
        }
        if let Some(value) = lookup("CONTACTS_DATABASE_URL") {
            self.database_url = value;
        }
        if let Some(value) = lookup("CONTACTS_SEED") {
            self.seed = value
                .parse()
                .with_context(|| format!("Invalid CONTACTS_SEED value: {value}"))?;
        }
        if let Some(value) = lookup("CONTACTS_LOG_LEVEL") {
            self.log_level = value;
        }
        Ok(())
    }

    /// Apply command-line flags.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(bind) = args.bind {
            self.bind = bind;
        }
        if let Some(url) = &args.database_url {
            self.database_url.clone_from(url);
        }
        if args.seed {
            self.seed = true;
        }
        if let Some(level) = &args.log_level {
            self.log_level.clone_from(level);
        }
    }

    /// Check values that are only meaningful once every layer is applied.
    ///
    /// # Errors
    ///
    /// Returns error if the log level or database URL is unusable
    pub fn validate(&self) -> Result<()> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {e}", self.log_level))?;
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "Unsupported database URL '{}': only sqlite: URLs are supported",
                self.database_url
            );
        }
        Ok(())
    }

    /// Parsed log level; call after [`Config::validate`].
    pub fn level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::INFO)
    }
}

/// Load configuration from all sources with hierarchy
///
/// # Errors
///
/// Returns error if:
/// - A config file is malformed TOML or has unknown keys
/// - The file given with `--config` does not exist
/// - An environment variable or the final config fails validation
pub async fn load_config(args: &Args) -> Result<Config> {
    // 1. Built-in defaults
    let mut config = Config::default();

    // 2. Global config if it exists
    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            config.merge(load_toml_file(&global_path).await?);
        }
    }

    // 3. Project config: explicit path must exist, the default one may not
    match &args.config {
        Some(path) => config.merge(load_toml_file(path).await?),
        None => {
            let project_path = PathBuf::from(PROJECT_CONFIG);
            if project_path.exists() {
                config.merge(load_toml_file(&project_path).await?);
            }
        }
    }

    // 4. Environment variable overrides
    config.apply_env(|key| std::env::var(key).ok())?;

    // 5. CLI flags
    config.apply_args(args);

    config.validate()?;
    Ok(config)
}

/// Get path to global config file
fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "contacts")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load a TOML file into a partial config
async fn load_toml_file(path: &Path) -> Result<PartialConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
