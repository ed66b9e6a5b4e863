//! TOML configuration for `cid-fmt`.
//!
//! Every setting is optional; command-line flags take precedence over the
//! file, and the file over built-in defaults.

use std::path::Path;

use serde::Deserialize;

/// Top-level configuration, parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output encoding.
    pub output: OutputSection,
    /// Logging configuration.
    pub log: LogSection,
}

/// `[output]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Multibase name or indicator (e.g. `"base32"`, `"z"`).
    ///
    /// When unset, each CID keeps the base it was written in.
    pub base: Option<String>,
    /// CID version to convert to (`0` or `1`).
    pub version: Option<u8>,
}

/// `[log]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Log level filter (e.g. `"warn"`, `"debug"`).
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Load config from a TOML file, or use defaults if no path given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)?;
                let config: CliConfig = toml::from_str(&content)?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a TOML string (used in tests).
    #[cfg(test)]
    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
