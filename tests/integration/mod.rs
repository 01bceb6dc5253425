//! Integration tests for justinvest
//!
//! These tests go through the public API only and use real record files
//! in temporary directories.

pub mod authorization_tests;
pub mod config_tests;
pub mod signup_login_tests;
