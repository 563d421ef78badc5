mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            target: default_target(),
            concurrency: default_concurrency(),
            report_dir: default_report_dir(),
            dry_run: false,
            timeout_sec: default_timeout_sec(),
            tool: ToolConfig::default(),
            standards: LanguageStandards::default(),
            sources: Sources::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        if self.tool.binary.as_os_str().is_empty() {
            return Err(ConfigError::EmptyBinary);
        }

        if self.standards.c.is_none() && self.standards.cpp.is_none() {
            return Err(ConfigError::NoStandards);
        }

        Ok(())
    }
}
