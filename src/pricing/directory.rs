//! Account directory: the read-only account snapshot.
//!
//! The engine never creates, mutates or removes accounts; it only reads
//! them. The read contract is the [`AccountProvider`] trait so a real
//! subscription service can stand in later; [`AccountDirectory`] is the
//! shipped in-memory snapshot. If the surrounding system updates accounts,
//! it must swap in a whole new snapshot (e.g. behind an `Arc`) so a single
//! resolver call always observes a consistent account graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Advisor seat counts for an account that holds an advisor tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePool {
    /// Seats currently assigned to an advisor.
    pub active: u32,
    /// Purchased seats with nobody assigned.
    pub inactive: u32,
}

impl LicensePool {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.active.saturating_add(self.inactive)
    }

    /// The seat line shown on advisor plan cards.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} active seats • {} inactive seats",
            self.active, self.inactive
        )
    }
}

/// An account's advisor-track subscription.
///
/// The license pool lives inside the tier variants, so a pool can never
/// exist without a tier. For `None`, [`AdvisorTier::license_pool`] yields
/// zero counts by convention rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum AdvisorTier {
    /// No advisor-track subscription.
    #[default]
    None,
    /// Advisor Basic: multi-client access and referral rewards.
    Basic {
        #[serde(default)]
        licenses: LicensePool,
    },
    /// Advisor Premium: adds client provisioning and cross-account
    /// discounts on Business-track plans.
    Premium {
        #[serde(default)]
        licenses: LicensePool,
    },
}

impl AdvisorTier {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic { .. })
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Premium { .. })
    }

    /// The advisor seat pool; zero counts when there is no advisor tier.
    #[must_use]
    pub fn license_pool(&self) -> LicensePool {
        match self {
            Self::None => LicensePool::default(),
            Self::Basic { licenses } | Self::Premium { licenses } => *licenses,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::Premium { .. } => "premium",
        }
    }
}

impl std::fmt::Display for AdvisorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One account record.
///
/// Accounts are independently constructible and serializable;
/// `linked_account_id` is a weak reference resolved through the directory,
/// never an owned handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identifier.
    pub id: String,
    /// Display name; also the lookup key in the current design, so it must
    /// be unique across the directory.
    pub name: String,
    /// Name of the account's Business-track plan.
    pub business_plan: String,
    /// Members on the account.
    pub seat_count: u32,
    /// Advisor-track subscription, if any.
    #[serde(default)]
    pub advisor_tier: AdvisorTier,
    /// Id of the advisor account this account is managed by, if any.
    #[serde(default)]
    pub linked_account_id: Option<String>,
}

impl Account {
    /// Check if this account is managed by (linked to) another account.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.linked_account_id.is_some()
    }
}

/// Read contract toward the account store.
///
/// This is the entire surface the engine requires; a real subscription
/// service backing the product later must satisfy exactly this. Reads
/// always see one immutable snapshot.
pub trait AccountProvider {
    /// All accounts in the snapshot, in stable order.
    fn accounts(&self) -> &[Account];

    /// Look up an account by display name.
    fn find_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts().iter().find(|a| a.name == name)
    }

    /// Look up an account by id. Used to resolve `linked_account_id`.
    fn find_by_id(&self, id: &str) -> Option<&Account> {
        self.accounts().iter().find(|a| a.id == id)
    }

    /// Accounts with no advisor link.
    fn standalone_accounts(&self) -> Vec<&Account> {
        self.accounts().iter().filter(|a| !a.is_linked()).collect()
    }

    /// Accounts with an advisor link, each paired with its resolved target.
    ///
    /// A dangling link resolves to `None`; that is a data-integrity problem
    /// for the provider, not a resolver failure.
    fn linked_accounts(&self) -> Vec<(&Account, Option<&Account>)> {
        self.accounts()
            .iter()
            .filter(|a| a.is_linked())
            .map(|a| {
                let target = a
                    .linked_account_id
                    .as_deref()
                    .and_then(|id| self.find_by_id(id));
                (a, target)
            })
            .collect()
    }
}

/// Immutable in-memory account snapshot with O(1) name and id lookups.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
}

impl AccountDirectory {
    /// Build a directory from account records.
    ///
    /// Rejects duplicate names and duplicate ids; both are lookup keys.
    pub fn from_accounts(accounts: Vec<Account>) -> Result<Self, PricingError> {
        let mut by_name = HashMap::with_capacity(accounts.len());
        let mut by_id = HashMap::with_capacity(accounts.len());
        for (i, account) in accounts.iter().enumerate() {
            if by_name.insert(account.name.clone(), i).is_some() {
                return Err(PricingError::DuplicateAccount {
                    name: account.name.clone(),
                });
            }
            if by_id.insert(account.id.clone(), i).is_some() {
                return Err(PricingError::DuplicateAccount {
                    name: account.id.clone(),
                });
            }
        }
        Ok(Self {
            accounts,
            by_name,
            by_id,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountProvider for AccountDirectory {
    fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn find_by_name(&self, name: &str) -> Option<&Account> {
        self.by_name.get(name).map(|&i| &self.accounts[i])
    }

    fn find_by_id(&self, id: &str) -> Option<&Account> {
        self.by_id.get(id).map(|&i| &self.accounts[i])
    }
}
