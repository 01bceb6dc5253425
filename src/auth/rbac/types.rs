//! RBAC type definitions

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access level assignable to a principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Regular client
    Client,
    /// Client with self-managed portfolio
    PremiumClient,
    /// Back-office employee
    Employee,
    /// Advisor with access to private consumer instruments
    FinancialAdvisor,
    /// Planner with access to money market instruments
    FinancialPlanner,
    /// Branch teller, restricted to business hours
    Teller,
}

impl Role {
    /// Number of roles
    pub const COUNT: usize = 6;

    /// Every role, in declaration order
    pub const ALL: [Role; Role::COUNT] = [
        Role::Client,
        Role::PremiumClient,
        Role::Employee,
        Role::FinancialAdvisor,
        Role::FinancialPlanner,
        Role::Teller,
    ];

    /// Slot in per-role tables
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Name as persisted in role records
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::PremiumClient => "Premium Client",
            Role::Employee => "Employee",
            Role::FinancialAdvisor => "Financial Advisor",
            Role::FinancialPlanner => "Financial Planner",
            Role::Teller => "Teller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}

/// Privileged action gated by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    ViewSelfBalance,
    ViewClientBalance,
    ViewSelfPortfolio,
    ViewClientPortfolio,
    ModifySelfPortfolio,
    ModifyClientPortfolio,
    ViewFinancialAdvisorContact,
    ViewFinancialPlannerContact,
    ViewMoneyMarketInstruments,
    ViewPrivateConsumerInstruments,
}

impl Operation {
    /// Every operation, in menu order
    pub const ALL: [Operation; 10] = [
        Operation::ViewSelfBalance,
        Operation::ViewClientBalance,
        Operation::ViewSelfPortfolio,
        Operation::ViewClientPortfolio,
        Operation::ModifySelfPortfolio,
        Operation::ModifyClientPortfolio,
        Operation::ViewFinancialAdvisorContact,
        Operation::ViewFinancialPlannerContact,
        Operation::ViewMoneyMarketInstruments,
        Operation::ViewPrivateConsumerInstruments,
    ];

    /// Stable identifier used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Operation::ViewSelfBalance => "view-self-balance",
            Operation::ViewClientBalance => "view-client-balance",
            Operation::ViewSelfPortfolio => "view-self-portfolio",
            Operation::ViewClientPortfolio => "view-client-portfolio",
            Operation::ModifySelfPortfolio => "modify-self-portfolio",
            Operation::ModifyClientPortfolio => "modify-client-portfolio",
            Operation::ViewFinancialAdvisorContact => "view-financial-advisor-contact",
            Operation::ViewFinancialPlannerContact => "view-financial-planner-contact",
            Operation::ViewMoneyMarketInstruments => "view-money-market-instruments",
            Operation::ViewPrivateConsumerInstruments => "view-private-consumer-instruments",
        }
    }

    /// Human-readable label for menus
    pub fn label(&self) -> &'static str {
        match self {
            Operation::ViewSelfBalance => "View own account balance",
            Operation::ViewClientBalance => "View client's account balance",
            Operation::ViewSelfPortfolio => "View own investment portfolio",
            Operation::ViewClientPortfolio => "View client's investment portfolio",
            Operation::ModifySelfPortfolio => "Modify own investment portfolio",
            Operation::ModifyClientPortfolio => "Modify client's investment portfolio",
            Operation::ViewFinancialAdvisorContact => "View Financial Advisor contact info",
            Operation::ViewFinancialPlannerContact => "View Financial Planner contact info",
            Operation::ViewMoneyMarketInstruments => "View money market instruments",
            Operation::ViewPrivateConsumerInstruments => "View private consumer instruments",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.key() == s)
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

/// Time-of-day interval during which a role may act, inclusive at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

const fn time_of_day(hour: u32, min: u32, sec: u32, nano: u32) -> NaiveTime {
    match NaiveTime::from_hms_nano_opt(hour, min, sec, nano) {
        Some(time) => time,
        None => panic!("invalid time of day"),
    }
}

const START_OF_DAY: NaiveTime = time_of_day(0, 0, 0, 0);
const END_OF_DAY: NaiveTime = time_of_day(23, 59, 59, 999_999_999);
const BUSINESS_OPEN: NaiveTime = time_of_day(9, 0, 0, 0);
const BUSINESS_CLOSE: NaiveTime = time_of_day(17, 0, 0, 0);

impl TimeWindow {
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Midnight through the last instant of the day
    pub const fn all_day() -> Self {
        Self::new(START_OF_DAY, END_OF_DAY)
    }

    /// 09:00 through 17:00
    pub const fn business_hours() -> Self {
        Self::new(BUSINESS_OPEN, BUSINESS_CLOSE)
    }

    pub fn contains(&self, at: NaiveTime) -> bool {
        self.start <= at && at <= self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// Why a decision came back negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The principal holds no roles
    NoAccessLevel,
    /// None of the principal's roles is inside its window
    NotAvailable,
    /// No role grants the operation, directly or by inheritance
    NotPermitted,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DenialReason::NoAccessLevel => "no access level",
            DenialReason::NotAvailable => "not available at this time",
            DenialReason::NotPermitted => "operation not permitted for this access level",
        })
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Roles that granted the permission
    pub granted_by_roles: Vec<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<DenialReason>,
}

impl PermissionCheck {
    pub(crate) fn allow(granted_by_roles: Vec<Role>) -> Self {
        Self {
            granted: true,
            granted_by_roles,
            denial_reason: None,
        }
    }

    pub(crate) fn deny(reason: DenialReason) -> Self {
        Self {
            granted: false,
            granted_by_roles: Vec::new(),
            denial_reason: Some(reason),
        }
    }
}
