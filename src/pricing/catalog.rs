//! Plan catalog and definitions.
//!
//! The catalog is the static, read-only registry of every plan the product
//! sells: pricing, tier ordering within each track, and the feature-grant
//! row used by the comparison grid. It is built once at process start and
//! shared immutably afterwards.
//!
//! # Code-configured catalogs
//!
//! Use the builder pattern for catalogs defined in code:
//!
//! ```rust
//! use headway::pricing::{GrantLevel, PlanCatalog, Track};
//!
//! let catalog = PlanCatalog::builder()
//!     .capability("exit_roadmap")
//!     .capability("scenario_modeling")
//!     .plan("Business Free")
//!         .track(Track::Business)
//!         .tier(0)
//!         .base_price(0)
//!         .grant("exit_roadmap", GrantLevel::Full)
//!         .done()
//!     .plan("Business Mini")
//!         .track(Track::Business)
//!         .tier(1)
//!         .base_price(100)
//!         .grant("exit_roadmap", GrantLevel::Full)
//!         .grant("scenario_modeling", GrantLevel::Full)
//!         .done()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(catalog.price_label("Business Mini").unwrap(), "$100/year");
//! ```
//!
//! # Document-managed catalogs
//!
//! Use [`PlanCatalog::from_json`] for catalogs maintained as a JSON document
//! by an admin surface; the document goes through the same construction-time
//! validation as the builder.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Canonical plan names used by the resolver's fixed rules.
pub mod plan_names {
    pub const BUSINESS_FREE: &str = "Business Free";
    pub const BUSINESS_MINI: &str = "Business Mini";
    pub const BUSINESS_MAX: &str = "Business Max";
    pub const ADVISOR_BASIC: &str = "Advisor Basic";
    pub const ADVISOR_PREMIUM: &str = "Advisor Premium";
}

/// Per-capability access level a plan confers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GrantLevel {
    /// No access.
    #[default]
    None,
    /// Limited access (e.g. a snapshot where full plans get the tool).
    Partial,
    /// Unrestricted access.
    Full,
}

impl GrantLevel {
    /// Check if this level confers any access at all.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for GrantLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two independent plan families.
///
/// An account holds exactly one Business-track plan and at most one
/// Advisor-track tier; tier ordinals never compare across tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Business,
    Advisor,
}

impl Track {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Advisor => "advisor",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single plan definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan name, the catalog's unique key (e.g. "Business Mini").
    pub name: String,
    /// Which family the plan belongs to.
    pub track: Track,
    /// Ordinal rank within the track; higher means more plan.
    pub tier: u8,
    /// Yearly price in whole currency units.
    pub base_price: u32,
    /// Short marketing description shown on the plan card.
    #[serde(default)]
    pub tagline: String,
    /// Grant level per capability. Padded at catalog construction so every
    /// declared capability has an entry.
    #[serde(default)]
    pub feature_grants: HashMap<String, GrantLevel>,
}

impl Plan {
    /// Grant level for a capability, `GrantLevel::None` when absent.
    #[must_use]
    pub fn grant(&self, capability: &str) -> GrantLevel {
        self.feature_grants
            .get(capability)
            .copied()
            .unwrap_or_default()
    }

    /// Check if this plan confers any access to a capability.
    #[must_use]
    pub fn has_capability(&self, capability: &str) -> bool {
        self.grant(capability).is_granted()
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.base_price == 0
    }
}

/// The static plan registry.
///
/// Plans keep their declaration order; lookups by name are O(1). The
/// catalog is immutable after construction and safe to share across any
/// number of concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    capabilities: Vec<String>,
    plans: Vec<Plan>,
    index: HashMap<String, usize>,
}

impl PlanCatalog {
    /// Create a builder for constructing a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog from declared capabilities and plan definitions.
    ///
    /// Enforced here, not at query time:
    /// - plan names are unique;
    /// - every grant names a declared capability;
    /// - every plan is padded with `GrantLevel::None` for declared
    ///   capabilities it omits.
    pub fn from_plans(
        capabilities: Vec<String>,
        mut plans: Vec<Plan>,
    ) -> Result<Self, PricingError> {
        let mut seen = HashSet::new();
        for capability in &capabilities {
            if !seen.insert(capability.as_str()) {
                return Err(PricingError::InvalidCatalogDocument {
                    message: format!("capability '{}' declared twice", capability),
                });
            }
        }

        let mut index = HashMap::with_capacity(plans.len());
        for (i, plan) in plans.iter_mut().enumerate() {
            if index.insert(plan.name.clone(), i).is_some() {
                return Err(PricingError::DuplicatePlan {
                    name: plan.name.clone(),
                });
            }
            for capability in plan.feature_grants.keys() {
                if !seen.contains(capability.as_str()) {
                    return Err(PricingError::UndeclaredCapability {
                        plan: plan.name.clone(),
                        capability: capability.clone(),
                    });
                }
            }
            for capability in &capabilities {
                plan.feature_grants
                    .entry(capability.clone())
                    .or_default();
            }
        }

        Ok(Self {
            capabilities,
            plans,
            index,
        })
    }

    /// Load a catalog from a JSON document.
    ///
    /// The document shape is `{"capabilities": [...], "plans": [...]}`; it
    /// goes through the same validation as the builder path.
    pub fn from_json(document: &str) -> Result<Self, PricingError> {
        let doc: CatalogDocument =
            serde_json::from_str(document).map_err(|e| PricingError::InvalidCatalogDocument {
                message: e.to_string(),
            })?;
        Self::from_plans(doc.capabilities, doc.plans)
    }

    /// All plans, in declaration order.
    #[must_use]
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Declared capabilities, in display order.
    #[must_use]
    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    /// Get a plan by name.
    pub fn get(&self, name: &str) -> Result<&Plan, PricingError> {
        self.index
            .get(name)
            .map(|&i| &self.plans[i])
            .ok_or_else(|| PricingError::UnknownPlan {
                name: name.to_string(),
            })
    }

    /// Check if a plan exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the number of plans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Check if there are no plans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Display price for a plan, formatted as `"$<base_price>/year"`.
    pub fn price_label(&self, name: &str) -> Result<String, PricingError> {
        let plan = self.get(name)?;
        Ok(format!("${}/year", plan.base_price))
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    capabilities: Vec<String>,
    plans: Vec<Plan>,
}

/// Builder for constructing a catalog.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    capabilities: Vec<String>,
    plans: Vec<Plan>,
}

impl CatalogBuilder {
    /// Declare a capability. Declaration order is the comparison grid's
    /// row order.
    #[must_use]
    pub fn capability(mut self, name: &str) -> Self {
        self.capabilities.push(name.to_string());
        self
    }

    /// Declare several capabilities at once.
    #[must_use]
    pub fn capabilities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities.extend(names.into_iter().map(Into::into));
        self
    }

    /// Start defining a new plan.
    #[must_use]
    pub fn plan(self, name: &str) -> PlanEntryBuilder {
        PlanEntryBuilder {
            parent: self,
            name: name.to_string(),
            track: Track::Business,
            tier: 0,
            base_price: 0,
            tagline: String::new(),
            grants: Vec::new(),
        }
    }

    /// Build the catalog, running construction-time validation.
    pub fn build(self) -> Result<PlanCatalog, PricingError> {
        PlanCatalog::from_plans(self.capabilities, self.plans)
    }

    fn add_plan(mut self, plan: Plan) -> Self {
        self.plans.push(plan);
        self
    }
}

/// Builder for a single plan entry.
#[derive(Debug)]
pub struct PlanEntryBuilder {
    parent: CatalogBuilder,
    name: String,
    track: Track,
    tier: u8,
    base_price: u32,
    tagline: String,
    grants: Vec<(String, GrantLevel)>,
}

impl PlanEntryBuilder {
    /// Set the plan's track. Defaults to `Track::Business`.
    #[must_use]
    pub fn track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }

    /// Set the tier ordinal within the track. Defaults to 0.
    #[must_use]
    pub fn tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }

    /// Set the yearly base price in whole currency units.
    #[must_use]
    pub fn base_price(mut self, price: u32) -> Self {
        self.base_price = price;
        self
    }

    /// Set the short marketing description.
    #[must_use]
    pub fn tagline(mut self, tagline: &str) -> Self {
        self.tagline = tagline.to_string();
        self
    }

    /// Grant a capability at a level. Capabilities not granted default to
    /// `GrantLevel::None` when the catalog is built.
    #[must_use]
    pub fn grant(mut self, capability: &str, level: GrantLevel) -> Self {
        self.grants.push((capability.to_string(), level));
        self
    }

    /// Finish defining this plan and return to the parent builder.
    #[must_use]
    pub fn done(self) -> CatalogBuilder {
        let plan = Plan {
            name: self.name,
            track: self.track,
            tier: self.tier,
            base_price: self.base_price,
            tagline: self.tagline,
            feature_grants: self.grants.into_iter().collect(),
        };
        self.parent.add_plan(plan)
    }
}
