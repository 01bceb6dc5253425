//! Credential store
//!
//! Argon2id hashes kept as `username:<PHC string>` records in a flat file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::records::{append_record, find_record, read_records, remove_last_record};
use crate::config::HashingConfig;
use crate::utils::crypto::password::{hash_password, verify_password};
use crate::utils::error::{JustInvestError, Result};

/// Checks a plaintext password against the stored credential.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// `true` only when the user exists and the password matches. Every
    /// failure, including storage problems, is reported as `false`.
    async fn verify(&self, username: &str, password: &str) -> bool;
}

/// File-backed credential store
#[derive(Debug, Clone)]
pub struct PasswdFile {
    path: PathBuf,
    hashing: HashingConfig,
}

impl PasswdFile {
    pub fn new<P: Into<PathBuf>>(path: P, hashing: HashingConfig) -> Self {
        Self {
            path: path.into(),
            hashing,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hash `password` and append a record for `username`
    pub async fn add_user(&self, username: &str, password: &str) -> Result<()> {
        let password = password.to_string();
        let hashing = self.hashing.clone();
        // Argon2 is deliberately slow; keep it off the async workers
        let hash = tokio::task::spawn_blocking(move || hash_password(&password, &hashing))
            .await
            .map_err(|e| JustInvestError::crypto(format!("Hashing task failed: {}", e)))??;

        append_record(&self.path, username, &hash).await?;

        info!(username, "Enrolled credentials");
        Ok(())
    }

    /// Remove the most recent record for `username`
    pub async fn remove_user(&self, username: &str) -> Result<bool> {
        let removed = remove_last_record(&self.path, username).await?;
        if removed {
            info!(username, "Removed credentials");
        }
        Ok(removed)
    }

    /// Whether a record exists for `username`
    pub async fn contains_user(&self, username: &str) -> Result<bool> {
        let content = read_records(&self.path).await?;
        Ok(find_record(&content, username).is_some())
    }

    async fn stored_hash(&self, username: &str) -> Result<Option<String>> {
        let content = read_records(&self.path).await?;
        Ok(find_record(&content, username).map(str::to_string))
    }
}

#[async_trait]
impl CredentialVerifier for PasswdFile {
    async fn verify(&self, username: &str, password: &str) -> bool {
        let hash = match self.stored_hash(username).await {
            Ok(Some(hash)) => hash,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "Could not read credential records");
                return false;
            }
        };

        let password = password.to_string();
        match tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await {
            Ok(Ok(matched)) => matched,
            Ok(Err(e)) => {
                warn!(username, error = %e, "Stored credential is unusable");
                false
            }
            Err(e) => {
                warn!(error = %e, "Verification task failed");
                false
            }
        }
    }
}
