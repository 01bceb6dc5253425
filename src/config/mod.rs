//! Configuration management for justInvest
//!
//! This module handles loading, validation, and management of all configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{JustInvestError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Record file locations
    #[serde(default)]
    pub storage: StorageConfig,
    /// Argon2 cost for new credentials
    #[serde(default)]
    pub hashing: HashingConfig,
    /// Signup password rules
    #[serde(default)]
    pub password_policy: PasswordPolicyConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse the file without validating it
    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| JustInvestError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| JustInvestError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self::default().with_env_overrides();

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from defaults; environment
    /// variables are applied last in both cases and the result is
    /// validated once.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::from_env();
        };

        let config = Self::read_file(path).await?.with_env_overrides();
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Get hashing configuration
    pub fn hashing(&self) -> &HashingConfig {
        &self.hashing
    }

    /// Get password policy configuration
    pub fn password_policy(&self) -> &PasswordPolicyConfig {
        &self.password_policy
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.storage
            .validate()
            .map_err(|e| JustInvestError::Config(format!("Storage config error: {}", e)))?;

        self.hashing
            .validate()
            .map_err(|e| JustInvestError::Config(format!("Hashing config error: {}", e)))?;

        self.password_policy
            .validate()
            .map_err(|e| JustInvestError::Config(format!("Password policy error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| JustInvestError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            JustInvestError::Config(format!("Failed to serialize config to JSON: {}", e))
        })
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            JustInvestError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
