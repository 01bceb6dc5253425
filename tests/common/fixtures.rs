//! Test fixtures
//!
//! Every fixture writes to its own temporary directory; nothing touches the
//! default `data/` paths.

use chrono::NaiveTime;
use justinvest::config::HashingConfig;
use justinvest::{AuthSystem, Config, Role};
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;

/// Time of day on the hour or minute
pub fn at(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

pub fn roles(list: &[Role]) -> HashSet<Role> {
    list.iter().copied().collect()
}

/// Record files in a temporary directory
pub struct TestEnv {
    dir: TempDir,
    pub config: Config,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.passwd_file = path_string(&dir, "passwd.txt");
        config.storage.roles_file = path_string(&dir, "roles.txt");
        config.storage.weak_passwords_file = path_string(&dir, "weak_passwords.txt");
        // Fast enough for tests, still a real Argon2id hash
        config.hashing = HashingConfig {
            time_cost: 1,
            memory_cost: 1024,
            parallelism: 1,
            hash_len: 32,
        };

        Self { dir, config }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub async fn write_weak_passwords(&self, passwords: &[&str]) {
        tokio::fs::write(&self.config.storage.weak_passwords_file, passwords.join("\n"))
            .await
            .unwrap();
    }

    pub async fn auth(&self) -> AuthSystem {
        AuthSystem::new(&self.config).await.unwrap()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn path_string(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).display().to_string()
}
