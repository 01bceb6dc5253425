//! Authentication types

use std::collections::HashSet;

use super::rbac::Role;

/// An authenticated identity and the roles it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Login name
    pub username: String,
    /// Zero or more access levels
    pub roles: HashSet<Role>,
}

impl Principal {
    pub fn new<S: Into<String>>(username: S, roles: HashSet<Role>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    /// Roles sorted in catalog order, for display
    pub fn sorted_roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.roles.iter().copied().collect();
        roles.sort();
        roles
    }
}
