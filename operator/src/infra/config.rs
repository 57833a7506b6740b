//! Infrastructure implementation of the `ConfigSource` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigSource;
use crate::domain::Configuration;

/// Declared configuration read from a YAML file on disk.
///
/// A missing or empty file yields the default configuration.
pub struct YamlConfigSource {
    path: PathBuf,
}

impl YamlConfigSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for YamlConfigSource {
    fn load(&self) -> Result<Configuration> {
        let path = &self.path;
        if !path.exists() {
            return Ok(Configuration::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Configuration::default());
        }
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }
}
