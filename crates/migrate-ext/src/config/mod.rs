//! Plan file loading and validation.

mod types;
mod validation;

pub use types::*;

use std::path::Path;

use crate::drivers::Provider;
use crate::error::Result;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// The target provider, if the plan names one.
    pub fn target_provider(&self) -> Result<Option<Provider>> {
        self.target.as_deref().map(Provider::from_db_type).transpose()
    }
}
