use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    data_dir: Option<PathBuf>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where to load the catalog from. None uses the built-in catalog.
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self { data_dir: None, log_level: DEFAULT_LOG_LEVEL.to_string(), config_path: None }
    }
}

impl Config {
    /// Loads the configuration from `provided`, which must exist, or else from
    /// the default location if a file is there. Without a file the defaults
    /// are used.
    pub fn load(provided: Option<&Path>) -> Result<Self> {
        let path = match provided {
            Some(explicit) => {
                if !explicit.exists() {
                    bail!("config file {} does not exist", explicit.display());
                }
                Some(explicit.to_path_buf())
            }
            None => default_config_path().filter(|path| path.exists()),
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = load_raw_config(&path)?;

        // a relative data directory is relative to the config file
        let data_dir = raw.data_dir.map(|dir| match path.parent() {
            Some(base) if dir.is_relative() => base.join(dir),
            _ => dir,
        });

        Ok(Self {
            data_dir,
            log_level: raw.log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            config_path: Some(path),
        })
    }

    /// Applies the command-line flags, which take precedence over the file.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.data_dir {
            self.data_dir = Some(dir.clone());
        }
        self
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("catalog").join("config.toml"))
}

fn load_raw_config(path: &Path) -> Result<RawConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}
