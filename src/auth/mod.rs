//! Authentication and authorization
//!
//! `rbac` is the decision engine. The remaining modules authenticate users
//! against flat record files and hand the engine a principal's role set.

pub mod credentials;
pub mod password_policy;
pub mod rbac;
mod records;
pub mod role_store;
pub mod system;
pub mod types;

pub use credentials::{CredentialVerifier, PasswdFile};
pub use password_policy::{PasswordPolicy, validate_username};
pub use rbac::{
    Catalog, CatalogBuilder, DenialReason, Operation, PermissionCheck, RbacSystem, Role,
    TimeWindow,
};
pub use role_store::{RoleResolver, RolesFile, parse_roles};
pub use system::{AuthSystem, authenticate};
pub use types::Principal;
