//! Authorization decisions over the shipped catalog

#[cfg(test)]
mod tests {
    use crate::common::{at, roles};
    use justinvest::{DenialReason, Operation, RbacSystem, Role};
    use std::collections::HashSet;

    /// Expected holders of each operation, counting inheritance
    fn holders(op: Operation) -> &'static [Role] {
        use Role::*;

        match op {
            Operation::ViewSelfBalance
            | Operation::ViewSelfPortfolio
            | Operation::ViewFinancialAdvisorContact => &[Client, PremiumClient],
            Operation::ModifySelfPortfolio | Operation::ViewFinancialPlannerContact => {
                &[PremiumClient]
            }
            Operation::ViewClientBalance | Operation::ViewClientPortfolio => {
                &[Employee, FinancialAdvisor, FinancialPlanner, Teller]
            }
            Operation::ModifyClientPortfolio => &[FinancialAdvisor, FinancialPlanner],
            Operation::ViewMoneyMarketInstruments => &[FinancialPlanner],
            Operation::ViewPrivateConsumerInstruments => &[FinancialAdvisor],
        }
    }

    // ==================== Access Matrix ====================

    #[test]
    fn test_full_access_matrix_at_noon() {
        let rbac = RbacSystem::standard();

        for role in Role::ALL {
            for op in Operation::ALL {
                let expected = holders(op).contains(&role);
                let check = rbac.check(&roles(&[role]), op, Some(at(12, 0)));
                assert_eq!(check.granted, expected, "{} / {}", role, op);
                if !expected {
                    assert_eq!(check.denial_reason, Some(DenialReason::NotPermitted));
                }
            }
        }
    }

    #[test]
    fn test_teller_after_hours_denied_everything() {
        let rbac = RbacSystem::standard();
        let teller = roles(&[Role::Teller]);

        for op in Operation::ALL {
            for time in [at(0, 0), at(8, 59), at(17, 1), at(23, 59)] {
                let check = rbac.check(&teller, op, Some(time));
                assert!(!check.granted);
                assert_eq!(check.denial_reason, Some(DenialReason::NotAvailable));
            }
        }
    }

    #[test]
    fn test_non_teller_roles_unaffected_by_time() {
        let rbac = RbacSystem::standard();
        let planner = roles(&[Role::FinancialPlanner]);

        for hour in 0..24 {
            assert!(rbac.can_perform_at(
                &planner,
                Operation::ViewMoneyMarketInstruments,
                at(hour, 30)
            ));
        }
    }

    #[test]
    fn test_empty_role_set_reason_wins_at_any_time() {
        let rbac = RbacSystem::standard();
        let none = HashSet::new();

        for time in [at(3, 0), at(12, 0), at(22, 0)] {
            let check = rbac.check(&none, Operation::ViewSelfBalance, Some(time));
            assert_eq!(check.denial_reason, Some(DenialReason::NoAccessLevel));
            assert!(check.granted_by_roles.is_empty());
        }
    }

    // ==================== Mixed Role Sets ====================

    #[test]
    fn test_teller_and_client_after_hours() {
        let rbac = RbacSystem::standard();
        let set = roles(&[Role::Teller, Role::Client]);

        // The client keeps the principal available; teller grants still count
        let check = rbac.check(&set, Operation::ViewClientBalance, Some(at(20, 0)));
        assert!(check.granted);
        assert_eq!(check.granted_by_roles, vec![Role::Teller]);

        let check = rbac.check(&set, Operation::ModifyClientPortfolio, Some(at(20, 0)));
        assert_eq!(check.denial_reason, Some(DenialReason::NotPermitted));
    }

    #[test]
    fn test_permitted_operations_for_staff() {
        let rbac = RbacSystem::standard();
        let ops = rbac.permitted_operations(&roles(&[Role::FinancialAdvisor]));

        assert_eq!(ops.len(), 4);
        assert!(ops.contains(&Operation::ViewPrivateConsumerInstruments));
        assert!(!ops.contains(&Operation::ViewMoneyMarketInstruments));
    }

    #[test]
    fn test_current_time_check_matches_explicit_window() {
        let rbac = RbacSystem::standard();
        let client = roles(&[Role::Client]);

        // Clients are available all day, so "now" cannot change the outcome
        assert!(rbac.is_available(&client));
        assert!(rbac.can_perform(&client, Operation::ViewSelfBalance));
        assert!(!rbac.can_perform(&client, Operation::ViewClientBalance));
    }
}
