//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::common::TestEnv;
    use justinvest::config::Validate;
    use justinvest::{Config, JustInvestError};

    #[tokio::test]
    async fn test_yaml_round_trip_through_file() {
        let env = TestEnv::new();
        let path = env.path("justinvest.yaml");
        tokio::fs::write(&path, env.config.to_yaml().unwrap())
            .await
            .unwrap();

        let loaded = Config::from_file(&path).await.unwrap();
        assert_eq!(loaded, env.config);
    }

    #[tokio::test]
    async fn test_empty_file_gives_defaults() {
        let env = TestEnv::new();
        let path = env.path("empty.yaml");
        tokio::fs::write(&path, "{}\n").await.unwrap();

        let loaded = Config::from_file(&path).await.unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[tokio::test]
    async fn test_invalid_hashing_rejected() {
        let env = TestEnv::new();
        let path = env.path("bad.yaml");
        tokio::fs::write(&path, "hashing:\n  time_cost: 0\n")
            .await
            .unwrap();

        let result = Config::from_file(&path).await;
        assert!(matches!(result, Err(JustInvestError::Config(msg)) if msg.contains("time cost")));
    }

    #[tokio::test]
    async fn test_malformed_yaml_rejected() {
        let env = TestEnv::new();
        let path = env.path("broken.yaml");
        tokio::fs::write(&path, "storage: [unterminated\n").await.unwrap();

        assert!(Config::from_file(&path).await.is_err());
    }

    #[test]
    fn test_same_file_for_passwords_and_roles_rejected() {
        let mut config = TestEnv::new().config;
        config.storage.roles_file = config.storage.passwd_file.clone();

        assert!(config.storage.validate().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_export() {
        let json = Config::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["password_policy"]["min_length"], 8);
        assert_eq!(value["hashing"]["memory_cost"], 65536);
    }
}
