//! Role store
//!
//! Maps a username to the roles recorded for it at signup, stored as
//! `username:Role A,Role B` lines.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::rbac::Role;
use super::records::{append_record, find_record, read_records};
use crate::utils::error::Result;

/// Resolves the persisted roles of a user.
#[async_trait]
pub trait RoleResolver: Send + Sync {
    /// Roles recorded for `username`; empty when the user has no record.
    async fn roles_of(&self, username: &str) -> Result<HashSet<Role>>;
}

/// Parse a comma-delimited role list.
///
/// Unknown tokens are dropped with a warning rather than rejected, so a
/// record naming a retired role still yields the roles that remain valid.
pub fn parse_roles(record: &str) -> HashSet<Role> {
    record
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<Role>() {
            Ok(role) => Some(role),
            Err(_) => {
                warn!(token, "Dropping unknown role in role record");
                None
            }
        })
        .collect()
}

/// Render roles in catalog order for a record.
pub fn format_roles(roles: &[Role]) -> String {
    let mut roles = roles.to_vec();
    roles.sort();
    roles.dedup();
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// File-backed role store
#[derive(Debug, Clone)]
pub struct RolesFile {
    path: PathBuf,
}

impl RolesFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a role record for `username`
    pub async fn store_roles(&self, username: &str, roles: &[Role]) -> Result<()> {
        append_record(&self.path, username, &format_roles(roles)).await?;
        debug!(username, count = roles.len(), "Stored role record");
        Ok(())
    }
}

#[async_trait]
impl RoleResolver for RolesFile {
    async fn roles_of(&self, username: &str) -> Result<HashSet<Role>> {
        let content = read_records(&self.path).await?;
        Ok(find_record(&content, username)
            .map(parse_roles)
            .unwrap_or_default())
    }
}
