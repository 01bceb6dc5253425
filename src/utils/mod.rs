//! Utility modules for justInvest
//!
//! Error types, password hashing, and logging setup shared by the library
//! and the binary.

pub mod crypto;
pub mod error;
pub mod logging;
