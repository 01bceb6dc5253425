//! Configuration data models
//!
//! This module defines all configuration structures used by justInvest.

#![allow(missing_docs)]

pub mod hashing;
pub mod logging;
pub mod password_policy;
pub mod storage;

// Re-export all configuration types
pub use hashing::*;
pub use logging::*;
pub use password_policy::*;
pub use storage::*;

/// Default location of the credential records
pub fn default_passwd_file() -> String {
    "data/passwd.txt".to_string()
}

/// Default location of the role records
pub fn default_roles_file() -> String {
    "data/roles.txt".to_string()
}

/// Default location of the weak-password list
pub fn default_weak_passwords_file() -> String {
    "data/weak_passwords.txt".to_string()
}

/// Argon2 iterations
pub fn default_time_cost() -> u32 {
    3
}

/// Argon2 memory in KiB
pub fn default_memory_cost() -> u32 {
    65536 // 64 MiB
}

pub fn default_parallelism() -> u32 {
    2
}

/// Argon2 output length in bytes
pub fn default_hash_len() -> usize {
    32
}

pub fn default_min_length() -> usize {
    8
}

pub fn default_max_length() -> usize {
    12
}

pub fn default_special_chars() -> String {
    "!@#$%*&".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
