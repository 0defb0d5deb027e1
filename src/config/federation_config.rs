//! Federation configuration file handling

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_channel_capacity() -> usize {
    64
}

/// Federation configuration
///
/// Represents a config.yaml naming the metadata documents whose datasets
/// make up the federation, plus stream tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FederationConfig {
    /// Metadata document URLs to resolve into the catalog
    #[serde(default)]
    pub catalogs: Vec<String>,

    /// Capacity of the merged interval measurement channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for FederationConfig {
    fn default() -> Self {
        Self {
            catalogs: Vec::new(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl FederationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_catalog(&mut self, url: impl Into<String>) {
        self.catalogs.push(url.into());
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path.as_ref(), content)?;
        Ok(())
    }
}
