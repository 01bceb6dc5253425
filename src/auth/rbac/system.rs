//! RBAC system core functionality
//!
//! Decisions are pure functions of the role set, the operation, the instant,
//! and the shared catalog. Nothing here locks, blocks, or mutates.

use chrono::{Local, NaiveTime};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::catalog::Catalog;
use super::helpers::RbacHelpers;
use super::types::{DenialReason, Operation, PermissionCheck, Role};

/// RBAC system for resolving permissions and rendering decisions
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// Permission, inheritance, and availability tables
    catalog: Arc<Catalog>,
}

/// Wall-clock time of day, sampled once per decision
pub fn current_time_of_day() -> NaiveTime {
    Local::now().time()
}

impl RbacSystem {
    /// Create an RBAC system over a shared catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Create an RBAC system over the shipped catalog
    pub fn standard() -> Self {
        Self::new(Arc::new(Catalog::standard()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every operation reachable from `roles` through direct grants and
    /// inheritance. Empty input yields an empty set.
    pub fn resolve_permissions(&self, roles: &HashSet<Role>) -> HashSet<Operation> {
        self.catalog.collect_permissions(roles.iter().copied())
    }

    /// Whether at least one role is inside its window right now
    pub fn is_available(&self, roles: &HashSet<Role>) -> bool {
        self.is_available_at(roles, current_time_of_day())
    }

    /// Whether at least one role's window contains `at` (inclusive)
    pub fn is_available_at(&self, roles: &HashSet<Role>, at: NaiveTime) -> bool {
        roles
            .iter()
            .any(|role| self.catalog.availability(*role).contains(at))
    }

    /// Decide `operation` for `roles` at the current time
    pub fn can_perform(&self, roles: &HashSet<Role>, operation: Operation) -> bool {
        self.check(roles, operation, None).granted
    }

    /// Decide `operation` for `roles` at `at`
    pub fn can_perform_at(&self, roles: &HashSet<Role>, operation: Operation, at: NaiveTime) -> bool {
        self.check(roles, operation, Some(at)).granted
    }

    /// Detailed decision. Gates run in order and stop at the first failure:
    /// no roles, then availability, then permission.
    pub fn check(
        &self,
        roles: &HashSet<Role>,
        operation: Operation,
        at: Option<NaiveTime>,
    ) -> PermissionCheck {
        if roles.is_empty() {
            debug!(%operation, "denied: no roles");
            return PermissionCheck::deny(DenialReason::NoAccessLevel);
        }

        let at = at.unwrap_or_else(current_time_of_day);
        if !self.is_available_at(roles, at) {
            debug!(%operation, %at, "denied: outside availability window");
            return PermissionCheck::deny(DenialReason::NotAvailable);
        }

        let mut granted_by: Vec<Role> = roles
            .iter()
            .copied()
            .filter(|role| {
                self.catalog
                    .collect_permissions([*role])
                    .contains(&operation)
            })
            .collect();

        if granted_by.is_empty() {
            debug!(%operation, "denied: not permitted");
            return PermissionCheck::deny(DenialReason::NotPermitted);
        }

        granted_by.sort();
        PermissionCheck::allow(granted_by)
    }

    /// Resolved permissions in label order, for menus
    pub fn permitted_operations(&self, roles: &HashSet<Role>) -> Vec<Operation> {
        let mut operations: Vec<Operation> = self.resolve_permissions(roles).into_iter().collect();
        operations.sort_by_key(|op| op.label());
        operations
    }
}

impl Default for RbacSystem {
    fn default() -> Self {
        Self::standard()
    }
}
