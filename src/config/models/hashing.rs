//! Password hashing configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Argon2id cost parameters applied to newly enrolled passwords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Number of iterations
    #[serde(default = "default_time_cost")]
    pub time_cost: u32,
    /// Memory size in KiB
    #[serde(default = "default_memory_cost")]
    pub memory_cost: u32,
    /// Degree of parallelism
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
    /// Output length in bytes
    #[serde(default = "default_hash_len")]
    pub hash_len: usize,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            time_cost: default_time_cost(),
            memory_cost: default_memory_cost(),
            parallelism: default_parallelism(),
            hash_len: default_hash_len(),
        }
    }
}
