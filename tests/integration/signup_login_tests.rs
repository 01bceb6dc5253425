//! Signup and login against real record files

#[cfg(test)]
mod tests {
    use crate::common::{TestEnv, at, roles};
    use justinvest::auth::{PasswdFile, RolesFile};
    use justinvest::{
        AuthSystem, DenialReason, JustInvestError, Operation, Role, RoleResolver, authenticate,
    };

    #[tokio::test]
    async fn test_signup_persists_both_records() {
        let env = TestEnv::new();
        let auth = env.auth().await;

        auth.signup("sasha", &[Role::Teller, Role::Client], "Tell3r&Pay")
            .await
            .unwrap();

        let passwd = tokio::fs::read_to_string(env.path("passwd.txt")).await.unwrap();
        assert!(passwd.starts_with("sasha:$argon2id$"));
        assert!(!passwd.contains("Tell3r&Pay"));

        let roles_record = tokio::fs::read_to_string(env.path("roles.txt")).await.unwrap();
        assert_eq!(roles_record.trim_end(), "sasha:Client,Teller");
    }

    #[tokio::test]
    async fn test_login_from_a_fresh_system() {
        let env = TestEnv::new();
        env.auth()
            .await
            .signup("priya", &[Role::FinancialPlanner], "Plan!2030")
            .await
            .unwrap();

        // Nothing is cached between instances; records are read back from disk
        let auth = AuthSystem::new(&env.config).await.unwrap();
        let principal = auth.login("priya", "Plan!2030").await.unwrap();
        assert_eq!(principal.roles, roles(&[Role::FinancialPlanner]));

        let check = auth.authorize(&principal, Operation::ViewMoneyMarketInstruments, Some(at(2, 0)));
        assert!(check.granted);
    }

    #[tokio::test]
    async fn test_teller_login_then_after_hours_check() {
        let env = TestEnv::new();
        let auth = env.auth().await;
        auth.signup("tom", &[Role::Teller], "C0unter#1").await.unwrap();

        let principal = auth.login("tom", "C0unter#1").await.unwrap();
        let open = auth.authorize(&principal, Operation::ViewClientBalance, Some(at(9, 0)));
        assert!(open.granted);

        let closed = auth.authorize(&principal, Operation::ViewClientBalance, Some(at(17, 30)));
        assert_eq!(closed.denial_reason, Some(DenialReason::NotAvailable));
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_user_and_wrong_password() {
        let env = TestEnv::new();
        let auth = env.auth().await;
        auth.signup("ana", &[Role::Client], "Ana!pass1").await.unwrap();

        for (username, password) in [("ana", "Ana!pass2"), ("bob", "Ana!pass1"), ("", "")] {
            let result = auth.login(username, password).await;
            match result {
                Err(JustInvestError::Auth(msg)) => assert_eq!(msg, "Invalid username or password"),
                other => panic!("expected auth error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_signup_weak_password_from_list() {
        let env = TestEnv::new();
        env.write_weak_passwords(&["Password1!", "Welc0me!"]).await;
        let auth = env.auth().await;

        let result = auth.signup("ana", &[Role::Client], "wELC0ME!").await;
        assert!(matches!(result, Err(JustInvestError::Validation(msg)) if msg.contains("too common")));

        auth.signup("ana", &[Role::Client], "Welc0me!2").await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_signup_keeps_first_record() {
        let env = TestEnv::new();
        let auth = env.auth().await;
        auth.signup("ana", &[Role::Client], "Ana!pass1").await.unwrap();

        let result = auth.signup("ana", &[Role::Employee], "Ana!pass2").await;
        assert!(matches!(result, Err(JustInvestError::Conflict(_))));

        let principal = auth.login("ana", "Ana!pass1").await.unwrap();
        assert_eq!(principal.roles, roles(&[Role::Client]));
    }

    #[tokio::test]
    async fn test_authenticate_with_file_stores() {
        let env = TestEnv::new();
        let passwd = PasswdFile::new(env.path("passwd.txt"), env.config.hashing.clone());
        let role_store = RolesFile::new(env.path("roles.txt"));

        passwd.add_user("lee", "L33!secret").await.unwrap();
        tokio::fs::write(env.path("roles.txt"), "lee:Employee,Auditor\n")
            .await
            .unwrap();

        // Unknown role tokens are dropped, known ones survive
        assert_eq!(
            role_store.roles_of("lee").await.unwrap(),
            roles(&[Role::Employee])
        );

        let principal = authenticate(&passwd, &role_store, "lee", "L33!secret")
            .await
            .unwrap();
        assert_eq!(principal.sorted_roles(), vec![Role::Employee]);
    }
}
