//! Signup, login, and authorization glue
//!
//! Wires the credential store, the role store, and the password policy to
//! the RBAC engine.

use chrono::NaiveTime;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::credentials::{CredentialVerifier, PasswdFile};
use super::password_policy::{PasswordPolicy, validate_username};
use super::rbac::{Operation, PermissionCheck, RbacSystem, Role};
use super::role_store::{RoleResolver, RolesFile};
use super::types::Principal;
use crate::config::Config;
use crate::utils::error::{JustInvestError, Result};

/// Verify credentials and assemble the principal.
pub async fn authenticate(
    verifier: &dyn CredentialVerifier,
    resolver: &dyn RoleResolver,
    username: &str,
    password: &str,
) -> Result<Principal> {
    if !verifier.verify(username, password).await {
        warn!(username, "Login failed");
        return Err(JustInvestError::auth("Invalid username or password"));
    }

    let roles = resolver.roles_of(username).await?;
    if roles.is_empty() {
        warn!(username, "Authenticated user holds no roles");
    }

    info!(username, roles = roles.len(), "Login successful");
    Ok(Principal::new(username, roles))
}

/// Main authentication system
#[derive(Debug, Clone)]
pub struct AuthSystem {
    /// Configuration
    config: Arc<Config>,
    /// Credential records
    credentials: PasswdFile,
    /// Role records
    roles: RolesFile,
    /// Signup password rules
    policy: PasswordPolicy,
    /// RBAC system
    rbac: RbacSystem,
}

impl AuthSystem {
    /// Create an authentication system over the shipped catalog
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Initializing authentication system");

        let storage = config.storage();
        let policy = PasswordPolicy::load(
            config.password_policy().clone(),
            storage.weak_passwords_file.as_ref(),
        )
        .await?;

        Ok(Self {
            credentials: PasswdFile::new(&storage.passwd_file, config.hashing().clone()),
            roles: RolesFile::new(&storage.roles_file),
            policy,
            rbac: RbacSystem::standard(),
            config: Arc::new(config.clone()),
        })
    }

    /// Replace the RBAC system, e.g. with one over a fixture catalog
    pub fn with_rbac(mut self, rbac: RbacSystem) -> Self {
        self.rbac = rbac;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }

    pub fn credentials(&self) -> &PasswdFile {
        &self.credentials
    }

    pub fn roles(&self) -> &RolesFile {
        &self.roles
    }

    /// Enroll a new user and return the principal it becomes.
    pub async fn signup(&self, username: &str, roles: &[Role], password: &str) -> Result<Principal> {
        info!(username, "Signup requested");

        validate_username(username)?;
        if self.credentials.contains_user(username).await? {
            return Err(JustInvestError::conflict("Invalid or already existing username."));
        }

        if roles.is_empty() {
            return Err(JustInvestError::validation("No roles selected."));
        }

        self.policy.validate(username, password)?;

        // Credentials make the username taken, so undo them if the roles
        // cannot be written.
        self.credentials.add_user(username, password).await?;
        if let Err(e) = self.roles.store_roles(username, roles).await {
            warn!(username, error = %e, "Could not store roles; rolling back signup");
            self.credentials.remove_user(username).await?;
            return Err(e);
        }

        let roles: HashSet<Role> = roles.iter().copied().collect();
        info!(username, roles = roles.len(), "Signup successful");
        Ok(Principal::new(username, roles))
    }

    /// Verify credentials and load the stored roles.
    pub async fn login(&self, username: &str, password: &str) -> Result<Principal> {
        authenticate(&self.credentials, &self.roles, username, password).await
    }

    /// Decide whether `principal` may perform `operation`, at `at` or now.
    pub fn authorize(
        &self,
        principal: &Principal,
        operation: Operation,
        at: Option<NaiveTime>,
    ) -> PermissionCheck {
        let check = self.rbac.check(&principal.roles, operation, at);
        debug!(
            username = %principal.username,
            %operation,
            granted = check.granted,
            "Authorization decision"
        );
        check
    }

    /// Operations the principal holds, in label order
    pub fn permitted_operations(&self, principal: &Principal) -> Vec<Operation> {
        self.rbac.permitted_operations(&principal.roles)
    }
}
