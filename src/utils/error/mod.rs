//! Error handling for justInvest
//!
//! This module defines the error type shared by configuration loading, the
//! credential and role stores, and the signup/login flow. The authorization
//! engine itself never fails; it answers with a decision instead.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{JustInvestError, Result};
