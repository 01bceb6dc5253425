//! Section validators
//!
//! One `Validate` implementation per configuration section.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating storage configuration");

        if self.passwd_file.trim().is_empty() {
            return Err("Password file path cannot be empty".to_string());
        }

        if self.roles_file.trim().is_empty() {
            return Err("Roles file path cannot be empty".to_string());
        }

        if self.passwd_file == self.roles_file {
            return Err("Password file and roles file must be different files".to_string());
        }

        Ok(())
    }
}

impl Validate for HashingConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating hashing configuration");

        if self.time_cost == 0 {
            return Err("Argon2 time cost must be at least 1".to_string());
        }

        if self.parallelism == 0 {
            return Err("Argon2 parallelism must be at least 1".to_string());
        }

        // Argon2 requires at least 8 KiB per lane
        let min_memory = self.parallelism.saturating_mul(8);
        if self.memory_cost < min_memory {
            return Err(format!(
                "Argon2 memory cost must be at least {} KiB for parallelism {}",
                min_memory, self.parallelism
            ));
        }

        if self.hash_len < 16 {
            return Err("Argon2 hash length should be at least 16 bytes".to_string());
        }

        Ok(())
    }
}

impl Validate for PasswordPolicyConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating password policy configuration");

        if self.min_length == 0 {
            return Err("Minimum password length must be greater than 0".to_string());
        }

        if self.min_length > self.max_length {
            return Err(format!(
                "Minimum password length ({}) exceeds maximum ({})",
                self.min_length, self.max_length
            ));
        }

        if self.special_chars.is_empty() {
            return Err("At least one special character must be configured".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        Ok(())
    }
}
