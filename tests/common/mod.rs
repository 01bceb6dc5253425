//! Common test utilities for justinvest
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures::TestEnv;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let env = TestEnv::new();
//!     let auth = env.auth().await;
//!     // ...
//! }
//! ```

pub mod fixtures;

pub use fixtures::{TestEnv, at, roles};
