//! # justInvest
//!
//! Role-based access control for the justInvest client portal, with
//! time-of-day availability windows on top of role inheritance.
//!
//! ## Features
//!
//! - **Closed role catalog**: six roles, ten operations, fixed inheritance
//! - **Time windows**: tellers act only during business hours
//! - **Ordered decisions**: no roles, then availability, then permission
//! - **Flat-file stores**: Argon2id credentials and role records
//!
//! ## Quick Start
//!
//! ```rust
//! use justinvest::{Operation, RbacSystem, Role};
//! use chrono::NaiveTime;
//! use std::collections::HashSet;
//!
//! let rbac = RbacSystem::standard();
//! let teller = HashSet::from([Role::Teller]);
//! let evening = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
//!
//! let check = rbac.check(&teller, Operation::ViewClientBalance, Some(evening));
//! assert!(!check.granted);
//! assert_eq!(
//!     check.denial_reason.unwrap().to_string(),
//!     "not available at this time"
//! );
//! ```
//!
//! ## Signup and Login
//!
//! ```rust,no_run
//! use justinvest::{AuthSystem, Config, Role};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let auth = AuthSystem::new(&config).await?;
//!
//!     auth.signup("alice", &[Role::Client], "Str0ng!Pw").await?;
//!     let principal = auth.login("alice", "Str0ng!Pw").await?;
//!     println!("{:?}", auth.permitted_operations(&principal));
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{JustInvestError, Result};

pub use auth::{
    AuthSystem, Catalog, CatalogBuilder, CredentialVerifier, DenialReason, Operation,
    PermissionCheck, Principal, RbacSystem, Role, RoleResolver, TimeWindow, authenticate,
};
pub use auth::rbac::current_time_of_day;
