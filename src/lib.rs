//! Headway - plan entitlement resolution for the Headway exit-planning platform
//!
//! Headway's pricing page is pure view glue over this crate: given an
//! account's state and a static plan catalog, the engine determines the
//! account's current tier, whether an upgrade path exists, whether an
//! advisor-linked discount applies, the feature-access level per capability,
//! and which named business scenario the account falls into (diagnostics).
//!
//! # Components
//!
//! - **Catalog**: static plan registry with tier ordering and feature grants
//! - **Directory**: read-only account snapshot with advisor links
//! - **Resolver**: pure per-account entitlement queries
//! - **Projector**: feature-by-plan comparison grids with replaceable columns
//!
//! # Quick Start
//!
//! ```rust
//! use headway::pricing::{
//!     fixtures, ComparisonSelection, EntitlementResolver, FeatureMatrix,
//! };
//!
//! headway::init_tracing();
//!
//! let catalog = fixtures::standard_catalog();
//! let directory = fixtures::sample_directory();
//! let resolver = EntitlementResolver::new(catalog);
//!
//! let view = resolver.resolve_by_name(&directory, "Acme Corp").unwrap();
//! assert_eq!(view.current_plan, "Business Mini");
//!
//! let selection = ComparisonSelection::new(
//!     resolver.catalog(),
//!     ["Business Free", "Business Mini", "Business Max"],
//! )
//! .unwrap();
//! let grid = FeatureMatrix::project(resolver.catalog(), &selection).unwrap();
//! assert_eq!(grid.columns().len(), 3);
//! ```

mod config;
mod error;
pub mod pricing;

// Re-exports for public API
pub use config::{Config, ConfigBuilder, LoggingConfig};
pub use error::{HeadwayError, Result};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging with sensible defaults
///
/// This should be called early in your application, before the first
/// resolver call.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "headway=debug")
/// - `HEADWAY_LOG_JSON`: Set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("HEADWAY_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Initialize tracing with a custom configuration
pub fn init_tracing_with_config(config: &Config) {
    let env_filter = EnvFilter::new(&config.logging.level);

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
