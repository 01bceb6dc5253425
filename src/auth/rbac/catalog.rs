//! Role and operation catalog
//!
//! Direct grants, inheritance edges, and availability windows. A catalog is
//! immutable once built and is shared between engines through an `Arc`.

use crate::utils::error::{JustInvestError, Result};
use std::collections::HashSet;
use tracing::debug;

use super::types::{Operation, Role, TimeWindow};

/// Immutable permission tables, one slot per role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    direct: [HashSet<Operation>; Role::COUNT],
    parents: [Vec<Role>; Role::COUNT],
    windows: [TimeWindow; Role::COUNT],
}

fn standard_grants(role: Role) -> &'static [Operation] {
    use Operation::*;

    match role {
        Role::Client => &[
            ViewSelfBalance,
            ViewSelfPortfolio,
            ViewFinancialAdvisorContact,
        ],
        Role::PremiumClient => &[ModifySelfPortfolio, ViewFinancialPlannerContact],
        Role::Employee => &[ViewClientBalance, ViewClientPortfolio],
        Role::FinancialPlanner => &[ModifyClientPortfolio, ViewMoneyMarketInstruments],
        Role::FinancialAdvisor => &[ModifyClientPortfolio, ViewPrivateConsumerInstruments],
        Role::Teller => &[],
    }
}

fn standard_parents(role: Role) -> &'static [Role] {
    match role {
        Role::PremiumClient => &[Role::Client],
        Role::FinancialPlanner | Role::FinancialAdvisor | Role::Teller => &[Role::Employee],
        Role::Client | Role::Employee => &[],
    }
}

fn standard_window(role: Role) -> TimeWindow {
    match role {
        Role::Teller => TimeWindow::business_hours(),
        Role::Client
        | Role::PremiumClient
        | Role::Employee
        | Role::FinancialAdvisor
        | Role::FinancialPlanner => TimeWindow::all_day(),
    }
}

impl Catalog {
    /// The tables shipped with justInvest
    pub fn standard() -> Self {
        Self {
            direct: Role::ALL.map(|role| standard_grants(role).iter().copied().collect()),
            parents: Role::ALL.map(|role| standard_parents(role).to_vec()),
            windows: Role::ALL.map(standard_window),
        }
    }

    /// Start an alternate catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Operations granted to `role` without inheritance
    pub fn direct_permissions(&self, role: Role) -> &HashSet<Operation> {
        &self.direct[role.index()]
    }

    /// Roles whose permissions `role` also receives
    pub fn parents(&self, role: Role) -> &[Role] {
        &self.parents[role.index()]
    }

    /// When `role` may act
    pub fn availability(&self, role: Role) -> TimeWindow {
        self.windows[role.index()]
    }

    /// Check windows are well-formed and the inheritance graph is acyclic
    pub fn validate(&self) -> Result<()> {
        for role in Role::ALL {
            let window = self.availability(role);
            if window.start > window.end {
                return Err(JustInvestError::Config(format!(
                    "Availability window for {} starts after it ends ({})",
                    role, window
                )));
            }
        }

        if let Some(cycle) = self.find_cycle() {
            let path: Vec<&str> = cycle.iter().map(Role::as_str).collect();
            return Err(JustInvestError::Config(format!(
                "Role inheritance cycle: {}",
                path.join(" -> ")
            )));
        }

        Ok(())
    }

    /// Iterative three-colour DFS; returns the cycle path if one exists.
    fn find_cycle(&self) -> Option<Vec<Role>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = [Mark::Unvisited; Role::COUNT];

        for root in Role::ALL {
            if marks[root.index()] != Mark::Unvisited {
                continue;
            }

            // (role, next parent to visit)
            let mut stack: Vec<(Role, usize)> = vec![(root, 0)];
            marks[root.index()] = Mark::InProgress;

            while let Some((role, next)) = stack.pop() {
                let parents = self.parents(role);
                if next == parents.len() {
                    marks[role.index()] = Mark::Done;
                    continue;
                }

                stack.push((role, next + 1));
                let parent = parents[next];
                match marks[parent.index()] {
                    Mark::Unvisited => {
                        marks[parent.index()] = Mark::InProgress;
                        stack.push((parent, 0));
                    }
                    Mark::InProgress => {
                        let start = stack.iter().position(|(r, _)| *r == parent)?;
                        let mut cycle: Vec<Role> =
                            stack[start..].iter().map(|(r, _)| *r).collect();
                        cycle.push(parent);
                        return Some(cycle);
                    }
                    Mark::Done => {}
                }
            }
        }

        None
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for alternate catalogs, such as small test fixtures
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    direct: [HashSet<Operation>; Role::COUNT],
    parents: [Vec<Role>; Role::COUNT],
    windows: [Option<TimeWindow>; Role::COUNT],
}

impl CatalogBuilder {
    /// Grant operations directly to a role
    pub fn grant(mut self, role: Role, operations: &[Operation]) -> Self {
        self.direct[role.index()].extend(operations.iter().copied());
        self
    }

    /// Declare that `role` inherits everything `parent` holds
    pub fn inherit(mut self, role: Role, parent: Role) -> Self {
        let parents = &mut self.parents[role.index()];
        if !parents.contains(&parent) {
            parents.push(parent);
        }
        self
    }

    /// Set the availability window for a role
    pub fn window(mut self, role: Role, window: TimeWindow) -> Self {
        self.windows[role.index()] = Some(window);
        self
    }

    /// Give every role without a window the full day
    pub fn all_day_by_default(mut self) -> Self {
        for slot in self.windows.iter_mut().filter(|w| w.is_none()) {
            *slot = Some(TimeWindow::all_day());
        }
        self
    }

    /// Finish the catalog, rejecting missing windows and inheritance cycles
    pub fn build(self) -> Result<Catalog> {
        let mut windows = [TimeWindow::all_day(); Role::COUNT];
        for role in Role::ALL {
            windows[role.index()] = self.windows[role.index()].ok_or_else(|| {
                JustInvestError::Config(format!("No availability window for role {}", role))
            })?;
        }

        let catalog = Catalog {
            direct: self.direct,
            parents: self.parents,
            windows,
        };
        catalog.validate()?;

        debug!("Built catalog for {} roles", Role::COUNT);
        Ok(catalog)
    }
}
