//! Configuration Management
//!
//! Loads output preferences from TOML. Precedence, lowest first:
//! built-in defaults, config file, `ROASTGEN_*` environment variables,
//! command-line flags (applied by the CLI).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{Result, RoastError};
use crate::output::OutputFormat;

/// File name searched for in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "roastgen.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Use the clean phrase lists
    #[serde(default)]
    pub filtered: bool,
    /// Colorize labels on a terminal
    #[serde(default = "default_true")]
    pub color: bool,
    /// Fixed seed for reproducible draws
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filtered: false,
            color: true,
            seed: None,
            format: OutputFormat::Text,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Candidate config locations when no explicit path is given.
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("roastgen").join("config.toml"));
    }
    paths
}

impl Config {
    /// Load from `path`, or the first default location that exists.
    ///
    /// An explicit path must exist; default locations are optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let mut loaded = None;
                for p in default_paths() {
                    if p.is_file() {
                        loaded = Some(Self::from_file(&p)?);
                        break;
                    }
                }
                loaded.unwrap_or_else(|| {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                })
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RoastError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| RoastError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Override fields from `ROASTGEN_*` variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("ROASTGEN_FILTERED") {
            self.filtered = parse_bool(&value).ok_or_else(|| {
                RoastError::Config(format!("ROASTGEN_FILTERED: expected a boolean, got '{}'", value))
            })?;
        }
        if let Some(value) = lookup("ROASTGEN_SEED") {
            let seed = value.trim().parse::<u64>().map_err(|e| {
                RoastError::Config(format!("ROASTGEN_SEED: {}", e))
            })?;
            self.seed = Some(seed);
        }
        if let Some(value) = lookup("ROASTGEN_FORMAT") {
            self.format = value
                .parse()
                .map_err(|e| RoastError::Config(format!("ROASTGEN_FORMAT: {}", e)))?;
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
