//! Configuration for the `arrayops` binary
//!
//! Values are layered: built-in defaults, then one TOML file (`--config` or
//! `config.toml` in the platform config directory), then `ARRAYOPS_*`
//! environment variables. Command-line flags are applied last by `main`.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

pub const ENV_LOG_LEVEL: &str = "ARRAYOPS_LOG_LEVEL";
pub const ENV_OUTPUT: &str = "ARRAYOPS_OUTPUT";
pub const ENV_PRETTY: &str = "ARRAYOPS_PRETTY";

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("Unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub output: OutputFormat,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputFormat::Plain,
            pretty: false,
        }
    }
}

/// Location of the per-user config file, if a home directory can be found
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "arrayops", "arrayops")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Load configuration from defaults, files and the environment
    ///
    /// A missing default file is skipped. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => Self::from_file(&default_path)?,
                _ => Self::default(),
            },
        };

        config.merge_env_vars();
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, ignoring values that do not parse
    pub fn merge_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                self.log_level = level;
            }
        }

        if let Some(output) = lookup(ENV_OUTPUT) {
            match output.parse::<OutputFormat>() {
                Ok(format) => self.output = format,
                Err(e) => warn!("Ignoring {}: {}", ENV_OUTPUT, e),
            }
        }

        if let Some(pretty) = lookup(ENV_PRETTY) {
            match pretty.trim().parse::<bool>() {
                Ok(value) => self.pretty = value,
                Err(_) => warn!("Ignoring {}: expected true or false", ENV_PRETTY),
            }
        }
    }
}
