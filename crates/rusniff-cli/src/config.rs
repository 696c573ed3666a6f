//! Configuration file support for rusniff
//!
//! Loads `.rusniff.toml` from the current directory or parent directories.
//! The config is the surface for project-specific knowledge the scan cannot
//! infer: foreign functions with known minimum arities, extra names to
//! ignore, and paths to skip.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sniff: SniffSection,
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SniffSection {
    /// Externally-defined functions mapped to their minimum argument
    /// counts, e.g. `getUrl = 1`
    pub foreign: BTreeMap<String, usize>,
    /// Project helper names that must never be flagged
    pub ignore: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Glob patterns to exclude from scanning
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "raw", "json" or "github"
    pub format: Option<String>,
}

impl Config {
    /// Load config from `.rusniff.toml` searching from current directory upward
    pub fn load() -> Result<Option<(Config, PathBuf)>> {
        Self::load_from(std::env::current_dir()?)
    }

    /// Load config searching from the given directory upward
    pub fn load_from(start_dir: PathBuf) -> Result<Option<(Config, PathBuf)>> {
        let mut current = Some(start_dir.as_path());

        while let Some(dir) = current {
            let config_path = dir.join(".rusniff.toml");
            if config_path.exists() {
                let config = Self::load_path(&config_path)?;
                return Ok(Some((config, config_path)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    /// Load config from a specific path
    pub fn load_path(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Turn the config into the sniff's configuration surface
    pub fn sniff_config(&self) -> rusniff_analyze::SniffConfig {
        rusniff_analyze::SniffConfig {
            foreign: self
                .sniff
                .foreign
                .iter()
                .map(|(name, min)| (name.clone(), *min))
                .collect(),
            ignored: self.sniff.ignore.clone(),
        }
    }
}
