//! Helper methods for RBAC operations

use std::collections::HashSet;

use super::catalog::Catalog;
use super::types::{Operation, Role};

pub(super) trait RbacHelpers {
    /// Get all permissions reachable from `seeds` (including inherited)
    fn collect_permissions<I>(&self, seeds: I) -> HashSet<Operation>
    where
        I: IntoIterator<Item = Role>;
}

impl RbacHelpers for Catalog {
    fn collect_permissions<I>(&self, seeds: I) -> HashSet<Operation>
    where
        I: IntoIterator<Item = Role>,
    {
        let mut permissions = HashSet::new();
        let mut visited = [false; Role::COUNT];
        let mut stack: Vec<Role> = seeds.into_iter().collect();

        // Explicit stack; the visited set also bounds a malformed cyclic graph
        while let Some(role) = stack.pop() {
            if std::mem::replace(&mut visited[role.index()], true) {
                continue;
            }

            permissions.extend(self.direct_permissions(role).iter().copied());
            stack.extend(
                self.parents(role)
                    .iter()
                    .copied()
                    .filter(|parent| !visited[parent.index()]),
            );
        }

        permissions
    }
}
