//! Signup rules for usernames and passwords

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::records::read_records;
use crate::config::PasswordPolicyConfig;
use crate::utils::error::{JustInvestError, Result};

/// Reject blank usernames and ones containing the record separator.
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() || username.contains(':') || username.contains('\n') {
        return Err(JustInvestError::validation("Invalid username."));
    }
    Ok(())
}

/// Proactive password checker
#[derive(Debug, Clone, Default)]
pub struct PasswordPolicy {
    config: PasswordPolicyConfig,
    /// Lower-cased
    weak_passwords: HashSet<String>,
}

impl PasswordPolicy {
    pub fn new(config: PasswordPolicyConfig) -> Self {
        Self {
            config,
            weak_passwords: HashSet::new(),
        }
    }

    /// Add passwords that are refused regardless of composition
    pub fn with_weak_passwords<I, S>(mut self, passwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.weak_passwords.extend(
            passwords
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty()),
        );
        self
    }

    /// Build a policy with the weak-password list read from `path`, one
    /// password per line. A missing file means an empty list.
    pub async fn load(config: PasswordPolicyConfig, path: &Path) -> Result<Self> {
        let content = read_records(path).await?;
        let policy = Self::new(config).with_weak_passwords(content.lines());
        debug!(
            count = policy.weak_passwords.len(),
            "Loaded weak password list"
        );
        Ok(policy)
    }

    /// Check `password` against every rule, reporting the first one broken.
    pub fn validate(&self, username: &str, password: &str) -> Result<()> {
        let length = password.chars().count();
        if length < self.config.min_length || length > self.config.max_length {
            return Err(JustInvestError::validation(format!(
                "Password must be between {} and {} characters long.",
                self.config.min_length, self.config.max_length
            )));
        }

        if password == username {
            return Err(JustInvestError::validation(
                "Password must not match the username.",
            ));
        }

        if !password.chars().any(char::is_uppercase) {
            return Err(JustInvestError::validation(
                "Password must contain at least one upper-case letter.",
            ));
        }
        if !password.chars().any(char::is_lowercase) {
            return Err(JustInvestError::validation(
                "Password must contain at least one lower-case letter.",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(JustInvestError::validation(
                "Password must contain at least one numerical digit.",
            ));
        }
        if !password.chars().any(|c| self.config.special_chars.contains(c)) {
            let allowed: Vec<String> = self.config.special_chars.chars().map(String::from).collect();
            return Err(JustInvestError::validation(format!(
                "Password must contain at least one special character: {}.",
                allowed.join(", ")
            )));
        }

        if self.weak_passwords.contains(&password.to_lowercase()) {
            return Err(JustInvestError::validation(
                "This password is too common and is not allowed.",
            ));
        }

        Ok(())
    }
}
