//! Configuration file schema for timecheck.
//!
//! The file is optional. When present it sets snippet limits and defaults
//! for the command-line flags, which always take precedence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::Limits;
use crate::detect::LanguageChoice;

/// Config file names searched for in the working directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["timecheck.yaml", ".timecheck.yaml"];

/// Output formats understood by the CLI.
pub const FORMATS: &[&str] = &["pretty", "json"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,
    /// "auto" (default), "javascript", "python" or "java"
    #[serde(default)]
    pub language: Option<String>,
    /// Target function for recursion detection.
    #[serde(default)]
    pub function: Option<String>,
    /// "pretty" (default) or "json"
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a config from YAML text. Empty text yields the defaults.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load the explicit config, or the first one found in `dir`.
    ///
    /// Returns the defaults when nothing is found. A missing explicit file is
    /// an error.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => discover(dir),
        };

        match path {
            Some(p) => {
                let config = Self::parse_file(&p)
                    .map_err(|e| anyhow::anyhow!("parsing config {}: {}", p.display(), e))?;
                validate(&config)?;
                Ok((config, Some(p)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// Returns the language setting (defaults to "auto").
    pub fn get_language(&self) -> &str {
        self.language.as_deref().unwrap_or("auto")
    }

    /// Returns the output format (defaults to "pretty").
    pub fn get_format(&self) -> &str {
        self.format.as_deref().unwrap_or("pretty")
    }
}

/// Find a config file in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Validate a config.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.limits.max_chars == 0 {
        anyhow::bail!("limits.max_chars must be greater than zero");
    }
    if config.limits.max_lines == 0 {
        anyhow::bail!("limits.max_lines must be greater than zero");
    }
    config.get_language().parse::<LanguageChoice>()?;
    if !FORMATS.contains(&config.get_format()) {
        anyhow::bail!(
            "invalid format {:?}, must be one of: {}",
            config.get_format(),
            FORMATS.join(", ")
        );
    }
    Ok(())
}
