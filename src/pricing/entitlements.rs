//! Entitlement resolution.
//!
//! Pure per-account queries over `(account, catalog)`: current plan,
//! recommendation flags, advisor discounts, upgrade wording and scenario
//! classification. Every function is total, synchronous and side-effect
//! free; the only state is the catalog the resolver was built with.

use serde::Serialize;

use super::catalog::{plan_names, Plan, PlanCatalog, Track};
use super::directory::{Account, AccountProvider, AdvisorTier, LicensePool};
use super::error::PricingError;

/// Percent off a business plan's base price for Premium-advisor accounts.
///
/// Fixed product table: Business Mini is fully covered by the advisor
/// relationship, Business Max is discounted 30%. Plans not listed here
/// never discount, whatever the advisor tier.
const DISCOUNT_TABLE: &[(&str, u32)] = &[
    (plan_names::BUSINESS_MINI, 100),
    (plan_names::BUSINESS_MAX, 30),
];

/// The designated top-tier plan of each track.
const RECOMMENDED_PLANS: &[&str] = &[plan_names::BUSINESS_MAX, plan_names::ADVISOR_PREMIUM];

/// A derived, presentation-time discount on a business plan.
///
/// Never stored and never cached: recomputed on every call so account
/// mutations are always reflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountOffer {
    pub original_price: u32,
    pub discounted_price: u32,
    pub discount_percent: u32,
}

/// Call-to-action wording for moving an account onto another plan.
///
/// Carries no semantics beyond the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanChange {
    /// Same track, strictly higher tier.
    Upgrade,
    /// Everything else, cross-track and same-tier moves included.
    Switch,
}

impl PlanChange {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upgrade => "upgrade",
            Self::Switch => "switch",
        }
    }
}

impl std::fmt::Display for PlanChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic classification of which branch of the rule set an account
/// exercises. No effect on pricing or entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    PremiumAdvisorWithMini,
    BasicAdvisorOnly,
    PremiumAdvisorViewingLinked,
    FreeTierOnly,
    OnBusinessMini,
    OnBusinessMax,
    Unclassified,
}

impl Scenario {
    /// Operator-facing label for the debug overlay.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::PremiumAdvisorWithMini => "Premium advisor with Business Mini",
            Self::BasicAdvisorOnly => "Basic advisor only",
            Self::PremiumAdvisorViewingLinked => "Premium advisor viewing linked account",
            Self::FreeTierOnly => "Only on free plan",
            Self::OnBusinessMini => "On Business Mini plan",
            Self::OnBusinessMax => "On Business Max plan",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn premium_with_mini(a: &Account) -> bool {
    a.advisor_tier.is_premium() && a.business_plan == plan_names::BUSINESS_MINI
}

fn basic_advisor_on_free(a: &Account) -> bool {
    a.advisor_tier.is_basic() && a.business_plan == plan_names::BUSINESS_FREE
}

fn premium_viewing_linked(a: &Account) -> bool {
    a.advisor_tier.is_premium() && a.is_linked()
}

fn on_free(a: &Account) -> bool {
    a.business_plan == plan_names::BUSINESS_FREE
}

fn on_mini(a: &Account) -> bool {
    a.business_plan == plan_names::BUSINESS_MINI
}

fn on_max(a: &Account) -> bool {
    a.business_plan == plan_names::BUSINESS_MAX
}

/// Ordered scenario rule table, first match wins.
///
/// The order is load-bearing: an account matching several predicates
/// classifies as the earliest one. Do not reorder.
static SCENARIO_RULES: &[(fn(&Account) -> bool, Scenario)] = &[
    (premium_with_mini, Scenario::PremiumAdvisorWithMini),
    (basic_advisor_on_free, Scenario::BasicAdvisorOnly),
    (premium_viewing_linked, Scenario::PremiumAdvisorViewingLinked),
    (on_free, Scenario::FreeTierOnly),
    (on_mini, Scenario::OnBusinessMini),
    (on_max, Scenario::OnBusinessMax),
];

/// Everything the pricing page needs for one account, resolved in a single
/// render pass.
#[derive(Debug, Clone, Serialize)]
pub struct AccountView {
    /// Display name of the resolved account; `None` for the fallback view.
    pub account_name: Option<String>,
    /// Name of the account's current Business-track plan.
    pub current_plan: String,
    /// Price label of the current plan, e.g. `"$100/year"`.
    pub price_label: String,
    /// Diagnostic scenario classification.
    pub scenario: Scenario,
    /// Advisor tier name: "none", "basic" or "premium".
    pub advisor_tier: String,
    /// Advisor seat pool; zero counts without an advisor tier.
    pub seats: LicensePool,
    /// Recommended plan names, in catalog order.
    pub recommended: Vec<String>,
    /// Applicable discount per business plan, in catalog order.
    pub discounts: Vec<(String, DiscountOffer)>,
}

impl AccountView {
    /// Check whether a plan carries the RECOMMENDED badge.
    #[must_use]
    pub fn is_recommended(&self, plan_name: &str) -> bool {
        self.recommended.iter().any(|p| p == plan_name)
    }

    /// The discount offer for a plan, if one applies to this account.
    #[must_use]
    pub fn discount_for(&self, plan_name: &str) -> Option<&DiscountOffer> {
        self.discounts
            .iter()
            .find(|(name, _)| name == plan_name)
            .map(|(_, offer)| offer)
    }
}

/// Per-account entitlement queries against one plan catalog.
pub struct EntitlementResolver {
    catalog: PlanCatalog,
}

impl EntitlementResolver {
    /// Create a resolver over a catalog.
    #[must_use]
    pub fn new(catalog: PlanCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this resolver answers from.
    #[must_use]
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// The account's current Business-track plan.
    ///
    /// An account storing a plan name the catalog does not know is a
    /// data-integrity failure and is propagated, never defaulted.
    pub fn current_plan<'a>(&'a self, account: &Account) -> Result<&'a Plan, PricingError> {
        self.catalog.get(&account.business_plan)
    }

    /// Check if a plan is the account's current plan.
    pub fn is_current_plan(
        &self,
        account: &Account,
        plan_name: &str,
    ) -> Result<bool, PricingError> {
        Ok(self.current_plan(account)?.name == plan_name)
    }

    /// Check if a plan carries the RECOMMENDED badge.
    ///
    /// Static predicate: true only for the designated top-tier plan of each
    /// track, independent of account state.
    #[must_use]
    pub fn is_recommended(plan_name: &str) -> bool {
        RECOMMENDED_PLANS.contains(&plan_name)
    }

    /// The account's advisor tier.
    #[must_use]
    pub fn advisor_tier<'a>(&self, account: &'a Account) -> &'a AdvisorTier {
        &account.advisor_tier
    }

    /// The advisor discount on a business plan, if one applies.
    ///
    /// Non-absent only when the account's own advisor tier is Premium and
    /// the plan is a Business-track plan listed in the fixed discount
    /// table; the free plan and untabled plans never discount. The plan
    /// name is dereferenced against the catalog first, so an unknown name
    /// fails even for accounts that would not qualify.
    ///
    /// Open product question, preserved from the original behavior: the
    /// discount keys off the *selected* account's own tier, not off the
    /// advisor relationship behind `linked_account_id`. A linked business
    /// account only sees the discount if it itself carries Premium.
    pub fn advisor_discount(
        &self,
        account: &Account,
        plan_name: &str,
    ) -> Result<Option<DiscountOffer>, PricingError> {
        let plan = self.catalog.get(plan_name)?;

        if !account.advisor_tier.is_premium() {
            return Ok(None);
        }
        if plan.track != Track::Business || plan.name == plan_names::BUSINESS_FREE {
            return Ok(None);
        }

        let offer = DISCOUNT_TABLE
            .iter()
            .find(|(name, _)| *name == plan.name)
            .map(|&(_, percent)| DiscountOffer {
                original_price: plan.base_price,
                discounted_price: plan.base_price - plan.base_price * percent / 100,
                discount_percent: percent,
            });
        Ok(offer)
    }

    /// Call-to-action wording for moving the account to a target plan.
    ///
    /// `Upgrade` when the target sits strictly above the current plan on
    /// the same track; `Switch` otherwise.
    pub fn upgrade_label(
        &self,
        account: &Account,
        target_plan_name: &str,
    ) -> Result<PlanChange, PricingError> {
        let current = self.current_plan(account)?;
        let target = self.catalog.get(target_plan_name)?;

        if current.track == target.track && current.tier < target.tier {
            Ok(PlanChange::Upgrade)
        } else {
            Ok(PlanChange::Switch)
        }
    }

    /// Classify which branch of the scenario rule set the account
    /// exercises. Diagnostic only.
    #[must_use]
    pub fn classify_scenario(&self, account: &Account) -> Scenario {
        for (matches, scenario) in SCENARIO_RULES {
            if matches(account) {
                return *scenario;
            }
        }
        Scenario::Unclassified
    }

    /// Resolve the full per-render bundle for one account.
    pub fn resolve_account_view(&self, account: &Account) -> Result<AccountView, PricingError> {
        let current = self.current_plan(account)?;
        let price_label = self.catalog.price_label(&current.name)?;
        let scenario = self.classify_scenario(account);

        let mut discounts = Vec::new();
        for plan in self.catalog.plans() {
            if let Some(offer) = self.advisor_discount(account, &plan.name)? {
                discounts.push((plan.name.clone(), offer));
            }
        }

        let recommended = self
            .catalog
            .plans()
            .iter()
            .filter(|p| Self::is_recommended(&p.name))
            .map(|p| p.name.clone())
            .collect();

        tracing::debug!(
            target: "headway::pricing",
            account = %account.name,
            plan = %current.name,
            scenario = %scenario,
            "resolved account view"
        );

        Ok(AccountView {
            account_name: Some(account.name.clone()),
            current_plan: current.name.clone(),
            price_label,
            scenario,
            advisor_tier: account.advisor_tier.as_str().to_string(),
            seats: account.advisor_tier.license_pool(),
            recommended,
            discounts,
        })
    }

    /// Resolve the render bundle for the account with the given display
    /// name, or `AccountNotFound` if the directory has no such account.
    pub fn resolve_by_name<P: AccountProvider>(
        &self,
        provider: &P,
        name: &str,
    ) -> Result<AccountView, PricingError> {
        let account = provider
            .find_by_name(name)
            .ok_or_else(|| PricingError::AccountNotFound {
                name: name.to_string(),
            })?;
        self.resolve_account_view(account)
    }

    /// The "no account selected" view: base free tier, no discounts.
    ///
    /// Account selection is user-driven and transient, so a missing
    /// account falls back here instead of failing the render.
    #[must_use]
    pub fn fallback_view(&self) -> AccountView {
        let price_label = self
            .catalog
            .price_label(plan_names::BUSINESS_FREE)
            .unwrap_or_else(|_| "$0/year".to_string());
        let recommended = self
            .catalog
            .plans()
            .iter()
            .filter(|p| Self::is_recommended(&p.name))
            .map(|p| p.name.clone())
            .collect();

        AccountView {
            account_name: None,
            current_plan: plan_names::BUSINESS_FREE.to_string(),
            price_label,
            scenario: Scenario::FreeTierOnly,
            advisor_tier: AdvisorTier::None.as_str().to_string(),
            seats: LicensePool::default(),
            recommended,
            discounts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::directory::AccountDirectory;
    use crate::pricing::fixtures;

    fn resolver() -> EntitlementResolver {
        EntitlementResolver::new(fixtures::standard_catalog())
    }

    fn account(plan: &str, tier: AdvisorTier, linked: Option<&str>) -> Account {
        Account {
            id: "test".to_string(),
            name: "Test Co".to_string(),
            business_plan: plan.to_string(),
            seat_count: 4,
            advisor_tier: tier,
            linked_account_id: linked.map(String::from),
        }
    }

    fn premium() -> AdvisorTier {
        AdvisorTier::Premium {
            licenses: LicensePool {
                active: 2,
                inactive: 1,
            },
        }
    }

    #[test]
    fn test_current_plan() {
        let resolver = resolver();
        let account = account("Business Mini", AdvisorTier::None, None);
        let plan = resolver.current_plan(&account).unwrap();
        assert_eq!(plan.name, account.business_plan);
        assert!(resolver.is_current_plan(&account, "Business Mini").unwrap());
        assert!(!resolver.is_current_plan(&account, "Business Max").unwrap());
    }

    #[test]
    fn test_current_plan_unknown_propagates() {
        let resolver = resolver();
        let account = account("Business Mega", AdvisorTier::None, None);
        let err = resolver.current_plan(&account).unwrap_err();
        assert_eq!(
            err,
            PricingError::UnknownPlan {
                name: "Business Mega".to_string()
            }
        );
        assert!(resolver.is_current_plan(&account, "Business Mega").is_err());
    }

    #[test]
    fn test_is_recommended() {
        assert!(EntitlementResolver::is_recommended("Business Max"));
        assert!(EntitlementResolver::is_recommended("Advisor Premium"));
        assert!(!EntitlementResolver::is_recommended("Business Mini"));
        assert!(!EntitlementResolver::is_recommended("Advisor Basic"));
        assert!(!EntitlementResolver::is_recommended("Business Free"));
    }

    #[test]
    fn test_discount_literals() {
        let resolver = resolver();
        let account = account("Business Free", premium(), None);

        let offer = resolver
            .advisor_discount(&account, "Business Mini")
            .unwrap()
            .unwrap();
        assert_eq!(
            offer,
            DiscountOffer {
                original_price: 100,
                discounted_price: 0,
                discount_percent: 100
            }
        );

        let offer = resolver
            .advisor_discount(&account, "Business Max")
            .unwrap()
            .unwrap();
        assert_eq!(
            offer,
            DiscountOffer {
                original_price: 1000,
                discounted_price: 700,
                discount_percent: 30
            }
        );
    }

    #[test]
    fn test_discount_requires_premium() {
        let resolver = resolver();

        let basic = account(
            "Business Free",
            AdvisorTier::Basic {
                licenses: LicensePool::default(),
            },
            None,
        );
        assert!(resolver
            .advisor_discount(&basic, "Business Mini")
            .unwrap()
            .is_none());

        let none = account("Business Free", AdvisorTier::None, None);
        assert!(resolver
            .advisor_discount(&none, "Business Max")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_discount_never_on_free_or_advisor_track() {
        let resolver = resolver();
        let account = account("Business Mini", premium(), None);

        assert!(resolver
            .advisor_discount(&account, "Business Free")
            .unwrap()
            .is_none());
        assert!(resolver
            .advisor_discount(&account, "Advisor Basic")
            .unwrap()
            .is_none());
        assert!(resolver
            .advisor_discount(&account, "Advisor Premium")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_discount_unknown_plan_fails_even_without_premium() {
        let resolver = resolver();
        let account = account("Business Free", AdvisorTier::None, None);
        let err = resolver
            .advisor_discount(&account, "Nonexistent Plan")
            .unwrap_err();
        assert!(matches!(err, PricingError::UnknownPlan { .. }));
    }

    #[test]
    fn test_upgrade_label() {
        let resolver = resolver();

        let on_free = account("Business Free", AdvisorTier::None, None);
        assert_eq!(
            resolver.upgrade_label(&on_free, "Business Mini").unwrap(),
            PlanChange::Upgrade
        );
        assert_eq!(
            resolver.upgrade_label(&on_free, "Business Max").unwrap(),
            PlanChange::Upgrade
        );

        let on_max = account("Business Max", AdvisorTier::None, None);
        assert_eq!(
            resolver.upgrade_label(&on_max, "Business Free").unwrap(),
            PlanChange::Switch
        );
        assert_eq!(
            resolver.upgrade_label(&on_max, "Business Max").unwrap(),
            PlanChange::Switch
        );

        // Cross-track moves are always a switch, whatever the ordinals.
        assert_eq!(
            resolver.upgrade_label(&on_free, "Advisor Premium").unwrap(),
            PlanChange::Switch
        );
    }

    #[test]
    fn test_scenario_rule_order_wins() {
        let resolver = resolver();

        // Rule 1 beats rules 3 and 5 even when all three match.
        let account_mini = account("Business Mini", premium(), Some("acme"));
        assert_eq!(
            resolver.classify_scenario(&account_mini),
            Scenario::PremiumAdvisorWithMini
        );

        // Rule 3 only fires once rule 1 cannot.
        let account_max = account("Business Max", premium(), Some("acme"));
        assert_eq!(
            resolver.classify_scenario(&account_max),
            Scenario::PremiumAdvisorViewingLinked
        );
    }

    #[test]
    fn test_scenario_literals() {
        let resolver = resolver();

        let cases = [
            (
                account("Business Free", AdvisorTier::None, None),
                Scenario::FreeTierOnly,
            ),
            (
                account("Business Mini", premium(), None),
                Scenario::PremiumAdvisorWithMini,
            ),
            (
                account(
                    "Business Free",
                    AdvisorTier::Basic {
                        licenses: LicensePool::default(),
                    },
                    None,
                ),
                Scenario::BasicAdvisorOnly,
            ),
            (
                account("Business Max", AdvisorTier::None, None),
                Scenario::OnBusinessMax,
            ),
            (
                account("Business Mini", AdvisorTier::None, None),
                Scenario::OnBusinessMini,
            ),
        ];
        for (account, expected) in cases {
            assert_eq!(resolver.classify_scenario(&account), expected);
        }
    }

    #[test]
    fn test_scenario_total_for_unknown_plan() {
        let resolver = resolver();
        // Classification never dereferences the catalog, so even a drifted
        // plan name lands in a scenario instead of failing.
        let account = account("Business Mega", AdvisorTier::None, None);
        assert_eq!(
            resolver.classify_scenario(&account),
            Scenario::Unclassified
        );
    }

    #[test]
    fn test_resolve_account_view() {
        let resolver = resolver();
        let account = account("Business Mini", premium(), Some("acme"));

        let view = resolver.resolve_account_view(&account).unwrap();
        assert_eq!(view.current_plan, "Business Mini");
        assert_eq!(view.price_label, "$100/year");
        assert_eq!(view.scenario, Scenario::PremiumAdvisorWithMini);
        assert_eq!(view.advisor_tier, "premium");
        assert_eq!(view.seats.active, 2);
        assert!(view.is_recommended("Business Max"));
        assert!(!view.is_recommended("Business Mini"));
        assert_eq!(view.discount_for("Business Mini").unwrap().discount_percent, 100);
        assert_eq!(view.discount_for("Business Max").unwrap().discount_percent, 30);
        assert!(view.discount_for("Business Free").is_none());
    }

    #[test]
    fn test_resolve_by_name() {
        let resolver = resolver();
        let directory = fixtures::sample_directory();

        let view = resolver.resolve_by_name(&directory, "Acme Corp").unwrap();
        assert_eq!(view.current_plan, "Business Mini");
        assert_eq!(view.scenario, Scenario::OnBusinessMini);

        let err = resolver
            .resolve_by_name(&directory, "Ghost Corp")
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::AccountNotFound {
                name: "Ghost Corp".to_string()
            }
        );
    }

    #[test]
    fn test_fallback_view() {
        let resolver = resolver();
        let view = resolver.fallback_view();
        assert!(view.account_name.is_none());
        assert_eq!(view.current_plan, "Business Free");
        assert_eq!(view.price_label, "$0/year");
        assert_eq!(view.scenario, Scenario::FreeTierOnly);
        assert!(view.discounts.is_empty());
        assert_eq!(view.seats, LicensePool::default());
    }

    #[test]
    fn test_fallback_view_without_free_plan_in_catalog() {
        let catalog = PlanCatalog::builder()
            .plan("Business Max")
            .tier(2)
            .base_price(1000)
            .done()
            .build()
            .unwrap();
        let resolver = EntitlementResolver::new(catalog);
        let view = resolver.fallback_view();
        assert_eq!(view.price_label, "$0/year");
    }

    #[test]
    fn test_discount_recomputed_per_call() {
        let resolver = resolver();
        let mut account = account("Business Free", premium(), None);

        assert!(resolver
            .advisor_discount(&account, "Business Max")
            .unwrap()
            .is_some());

        // Dropping the advisor tier must drop the offer on the next call.
        account.advisor_tier = AdvisorTier::None;
        assert!(resolver
            .advisor_discount(&account, "Business Max")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_seed_directory_scenarios() {
        let resolver = resolver();
        let directory: AccountDirectory = fixtures::sample_directory();

        let expected = [
            ("Acme Corp", Scenario::OnBusinessMini),
            ("TechStart Inc", Scenario::FreeTierOnly),
            ("GlobalTech Solutions", Scenario::OnBusinessMax),
            ("Innovate Labs", Scenario::PremiumAdvisorWithMini),
            ("Advisor Pro", Scenario::BasicAdvisorOnly),
        ];
        for (name, scenario) in expected {
            let view = resolver.resolve_by_name(&directory, name).unwrap();
            assert_eq!(view.scenario, scenario, "account {name}");
        }
    }
}
