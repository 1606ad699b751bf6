//! Plan entitlement resolution engine.
//!
//! Everything the pricing page decides (as opposed to renders) lives here:
//! the static plan catalog, the read-only account directory, the per-account
//! entitlement resolver and the feature comparison projector. The
//! presentation layer calls in once per render pass and draws the pure
//! outputs; nothing here calls back out, performs I/O or mutates an account.
//!
//! # Example
//!
//! ```rust
//! use headway::pricing::{
//!     fixtures, ComparisonSelection, EntitlementResolver, FeatureMatrix,
//! };
//!
//! let resolver = EntitlementResolver::new(fixtures::standard_catalog());
//! let directory = fixtures::sample_directory();
//!
//! // One render pass for the selected company.
//! let view = resolver.resolve_by_name(&directory, "Innovate Labs").unwrap();
//! assert_eq!(view.scenario.label(), "Premium advisor with Business Mini");
//! assert_eq!(view.discount_for("Business Mini").unwrap().discounted_price, 0);
//!
//! // The comparison table, with a caller-reordered column.
//! let selection = ComparisonSelection::new(
//!     resolver.catalog(),
//!     ["Business Free", "Business Mini", "Business Max"],
//! )
//! .unwrap();
//! let selection = selection
//!     .replace_column(resolver.catalog(), 0, "Advisor Premium")
//!     .unwrap();
//! let grid = FeatureMatrix::project(resolver.catalog(), &selection).unwrap();
//! assert_eq!(grid.rows().len(), resolver.catalog().capabilities().len());
//! ```

pub mod catalog;
pub mod directory;
pub mod entitlements;
pub mod error;
pub mod fixtures;
pub mod matrix;

// Catalog exports
pub use catalog::{
    plan_names, CatalogBuilder, GrantLevel, Plan, PlanCatalog, PlanEntryBuilder, Track,
};

// Directory exports
pub use directory::{Account, AccountDirectory, AccountProvider, AdvisorTier, LicensePool};

// Resolver exports
pub use entitlements::{
    AccountView, DiscountOffer, EntitlementResolver, PlanChange, Scenario,
};

// Projector exports
pub use matrix::{ComparisonSelection, FeatureMatrix, FeatureRow};

// Error exports
pub use error::PricingError;
