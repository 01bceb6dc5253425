//! Password policy configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Rules a new password must satisfy at signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicyConfig {
    /// Minimum length in characters
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Maximum length in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Characters that count as "special"
    #[serde(default = "default_special_chars")]
    pub special_chars: String,
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            special_chars: default_special_chars(),
        }
    }
}
