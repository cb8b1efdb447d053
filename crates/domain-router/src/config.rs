// File: src/config.rs
// Purpose: Configuration parsing from domain-router.toml

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::tree::RoutePrefix;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "domain-router.toml";

/// Router configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRouterConfig {
    /// Directory holding one folder per domain (default: "src")
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Recognized page extensions, with leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub domains: DomainsConfig,
}

/// Per-domain settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainsConfig {
    /// Domain name → URL prefix, e.g. `Marketing = "/"`, `Sales = "/s"`
    #[serde(default, alias = "domainPathAlias")]
    pub path_alias: BTreeMap<String, String>,
}

// Default values
fn default_directory() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    vec![".vue".to_string(), ".ts".to_string(), ".js".to_string()]
}

impl Default for DomainRouterConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extensions: default_extensions(),
            domains: DomainsConfig::default(),
        }
    }
}

impl DomainRouterConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: DomainRouterConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Ok(config)
    }

    /// Load configuration from default path (./domain-router.toml)
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Route prefix for a domain, honoring `path_alias`
    pub fn prefix_for(&self, domain: &str) -> RoutePrefix {
        match self.domains.path_alias.get(domain) {
            Some(alias) => RoutePrefix::aliased(domain, alias),
            None => RoutePrefix::domain(domain),
        }
    }

    /// Whether `path` ends with one of the recognized extensions
    pub fn accepts(&self, path: &str) -> bool {
        self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }
}
