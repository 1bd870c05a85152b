use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::flavor::Flavor;
use crate::log;
use crate::paths;
use crate::process::Toolchain;

/// Overrides the package manager binary
pub const NPM_ENV_VAR: &str = "KILN_NPM";
/// Overrides the package runner binary
pub const NPX_ENV_VAR: &str = "KILN_NPX";

/// User configuration from `~/.kiln/config.toml`
///
/// Every field is optional in the file; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package manager binary
    pub npm: String,
    /// Package runner binary
    pub npx: String,
    /// Flavor used when `--flavor` is not given
    pub default_flavor: Flavor,
}

impl Default for Config {
    fn default() -> Self {
        let tools = Toolchain::default();
        Self {
            npm: tools.npm,
            npx: tools.npx,
            default_flavor: Flavor::default(),
        }
    }
}

impl Config {
    /// Load from the user config file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        config.apply_overrides(|key| std::env::var(key).ok());
        log::debug("config", format_args!("resolved {:?}", config));
        Ok(config)
    }

    /// Load from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Apply `KILN_NPM` / `KILN_NPX`; empty values are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(npm) = lookup(NPM_ENV_VAR).filter(|v| !v.is_empty()) {
            self.npm = npm;
        }
        if let Some(npx) = lookup(NPX_ENV_VAR).filter(|v| !v.is_empty()) {
            self.npx = npx;
        }
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            npm: self.npm.clone(),
            npx: self.npx.clone(),
        }
    }
}
