//! Role-Based Access Control (RBAC) system
//!
//! The catalog holds the static tables; `RbacSystem` resolves inherited
//! permissions, checks time-of-day availability, and renders decisions.

mod catalog;
mod helpers;
mod system;
mod types;

// Re-export public types and structs
pub use catalog::{Catalog, CatalogBuilder};
pub use system::{RbacSystem, current_time_of_day};
pub use types::{DenialReason, Operation, PermissionCheck, Role, TimeWindow};
