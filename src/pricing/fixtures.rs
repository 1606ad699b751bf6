//! Seed catalog and directory.
//!
//! The five production plans and the five demo companies the pricing page
//! ships with. Tests and the demo build on these; a deployment with a
//! different catalog constructs its own via [`PlanCatalog::builder`] or
//! [`PlanCatalog::from_json`].

use super::catalog::GrantLevel::{Full, Partial};
use super::catalog::{plan_names, PlanCatalog, Track};
use super::directory::{Account, AccountDirectory, AdvisorTier, LicensePool};

/// The standard five-plan catalog.
///
/// Prices are yearly: the business track at $0/$100/$1000 and the advisor
/// track at $350/$3000 per seat.
#[must_use]
pub fn standard_catalog() -> PlanCatalog {
    PlanCatalog::builder()
        .capabilities([
            "exit_roadmap",
            "team_collaboration",
            "valuation_snapshot",
            "readiness_assessment",
            "industry_benchmarks",
            "scenario_modeling",
            "expert_support",
            "multi_client_access",
            "referral_rewards",
            "client_provisioning",
        ])
        .plan(plan_names::BUSINESS_FREE)
        .track(Track::Business)
        .tier(0)
        .base_price(0)
        .tagline("Get a personalized roadmap of your exit options at no cost.")
        .grant("exit_roadmap", Full)
        .grant("team_collaboration", Full)
        .grant("valuation_snapshot", Partial)
        .grant("readiness_assessment", Partial)
        .grant("industry_benchmarks", Partial)
        .done()
        .plan(plan_names::BUSINESS_MINI)
        .track(Track::Business)
        .tier(1)
        .base_price(100)
        .tagline("Run the numbers on the exit paths that fit your goals.")
        .grant("exit_roadmap", Full)
        .grant("team_collaboration", Full)
        .grant("valuation_snapshot", Full)
        .grant("readiness_assessment", Full)
        .grant("industry_benchmarks", Full)
        .grant("scenario_modeling", Full)
        .grant("expert_support", Partial)
        .done()
        .plan(plan_names::BUSINESS_MAX)
        .track(Track::Business)
        .tier(2)
        .base_price(1000)
        .tagline("Full support from first plan to final exit.")
        .grant("exit_roadmap", Full)
        .grant("team_collaboration", Full)
        .grant("valuation_snapshot", Full)
        .grant("readiness_assessment", Full)
        .grant("industry_benchmarks", Full)
        .grant("scenario_modeling", Full)
        .grant("expert_support", Full)
        .done()
        .plan(plan_names::ADVISOR_BASIC)
        .track(Track::Advisor)
        .tier(0)
        .base_price(350)
        .tagline("Help clients explore succession options with less overhead.")
        .grant("team_collaboration", Full)
        .grant("multi_client_access", Full)
        .grant("referral_rewards", Partial)
        .done()
        .plan(plan_names::ADVISOR_PREMIUM)
        .track(Track::Advisor)
        .tier(1)
        .base_price(3000)
        .tagline("Grow your practice with unlimited clients and tracking tools.")
        .grant("team_collaboration", Full)
        .grant("multi_client_access", Full)
        .grant("referral_rewards", Full)
        .grant("client_provisioning", Full)
        .grant("expert_support", Full)
        .done()
        .build()
        .expect("standard catalog is valid")
}

/// The five demo companies, including one premium advisor linked to a
/// client account and one basic advisor.
#[must_use]
pub fn sample_directory() -> AccountDirectory {
    AccountDirectory::from_accounts(vec![
        Account {
            id: "acme".to_string(),
            name: "Acme Corp".to_string(),
            business_plan: plan_names::BUSINESS_MINI.to_string(),
            seat_count: 12,
            advisor_tier: AdvisorTier::None,
            linked_account_id: None,
        },
        Account {
            id: "techstart".to_string(),
            name: "TechStart Inc".to_string(),
            business_plan: plan_names::BUSINESS_FREE.to_string(),
            seat_count: 5,
            advisor_tier: AdvisorTier::None,
            linked_account_id: None,
        },
        Account {
            id: "globaltech".to_string(),
            name: "GlobalTech Solutions".to_string(),
            business_plan: plan_names::BUSINESS_MAX.to_string(),
            seat_count: 25,
            advisor_tier: AdvisorTier::None,
            linked_account_id: None,
        },
        Account {
            id: "innovate".to_string(),
            name: "Innovate Labs".to_string(),
            business_plan: plan_names::BUSINESS_MINI.to_string(),
            seat_count: 8,
            advisor_tier: AdvisorTier::Premium {
                licenses: LicensePool {
                    active: 2,
                    inactive: 1,
                },
            },
            linked_account_id: Some("acme".to_string()),
        },
        Account {
            id: "advisorpro".to_string(),
            name: "Advisor Pro".to_string(),
            business_plan: plan_names::BUSINESS_FREE.to_string(),
            seat_count: 3,
            advisor_tier: AdvisorTier::Basic {
                licenses: LicensePool {
                    active: 1,
                    inactive: 0,
                },
            },
            linked_account_id: None,
        },
    ])
    .expect("sample directory is valid")
}
