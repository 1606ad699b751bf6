//! Pricing-specific error types.
//!
//! Provides granular error types for catalog, directory, resolver and
//! projector operations, distinguishing data-integrity drift (an account or
//! selection referencing a plan the catalog does not know) from transient
//! caller errors (an account name that matches nothing).

use std::fmt;

/// Pricing-specific errors.
///
/// These errors carry more context than generic errors and can be converted
/// to `HeadwayError` at the application boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    // Lookup errors
    /// A plan name not present in the catalog was dereferenced, from a
    /// stored account field, a comparison-selection entry, or a discount
    /// lookup target. Never defaulted: it signals drift between the account
    /// directory and the catalog.
    UnknownPlan { name: String },
    /// Account lookup by name or id found nothing. Callers treat this as
    /// "no account selected" and may fall back to the free-tier view.
    AccountNotFound { name: String },

    // Construction errors
    /// A plan grants a capability that was never declared on the catalog.
    UndeclaredCapability { plan: String, capability: String },
    /// Two plans share a name; plan names are the catalog's unique keys.
    DuplicatePlan { name: String },
    /// Two accounts share a name or id; both are lookup keys.
    DuplicateAccount { name: String },
    /// A catalog document failed to parse or had the wrong shape.
    InvalidCatalogDocument { message: String },

    // Projection errors
    /// `replace_column` was given an index past the end of the selection.
    ColumnOutOfRange { index: usize, len: usize },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlan { name } => {
                write!(f, "Unknown plan: {}", name)
            }
            Self::AccountNotFound { name } => {
                write!(f, "Account not found: {}", name)
            }
            Self::UndeclaredCapability { plan, capability } => {
                write!(
                    f,
                    "Plan '{}' grants undeclared capability '{}'",
                    plan, capability
                )
            }
            Self::DuplicatePlan { name } => {
                write!(f, "Duplicate plan name: {}", name)
            }
            Self::DuplicateAccount { name } => {
                write!(f, "Duplicate account: {}", name)
            }
            Self::InvalidCatalogDocument { message } => {
                write!(f, "Invalid catalog document: {}", message)
            }
            Self::ColumnOutOfRange { index, len } => {
                write!(
                    f,
                    "Column index {} out of range for selection of length {}",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for PricingError {}

impl From<PricingError> for crate::error::HeadwayError {
    fn from(err: PricingError) -> Self {
        match &err {
            // Map to NotFound (transient, caller-recoverable)
            PricingError::AccountNotFound { .. } => {
                crate::error::HeadwayError::NotFound(err.to_string())
            }

            // Map to Internal (data-integrity drift between directory,
            // catalog and selections)
            PricingError::UnknownPlan { .. }
            | PricingError::UndeclaredCapability { .. }
            | PricingError::DuplicatePlan { .. }
            | PricingError::DuplicateAccount { .. }
            | PricingError::InvalidCatalogDocument { .. } => {
                crate::error::HeadwayError::Internal(err.to_string())
            }

            // Map to BadRequest (caller passed a bad argument)
            PricingError::ColumnOutOfRange { .. } => {
                crate::error::HeadwayError::BadRequest(err.to_string())
            }
        }
    }
}

impl PricingError {
    /// Check if this error signals data-integrity drift that an operator
    /// must reconcile, as opposed to a recoverable caller error.
    #[must_use]
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            Self::UnknownPlan { .. }
                | Self::UndeclaredCapability { .. }
                | Self::DuplicatePlan { .. }
                | Self::DuplicateAccount { .. }
                | Self::InvalidCatalogDocument { .. }
        )
    }

    /// Check if this error is recoverable by the caller.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound { .. } | Self::ColumnOutOfRange { .. }
        )
    }
}
