//! Cryptographic utilities
//!
//! Password hashing for the credential store.

pub mod password;
