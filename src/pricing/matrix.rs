//! Feature comparison grids.
//!
//! The projector turns an ordered selection of plan names into a
//! capability-by-plan grid for the comparison table. Selections are
//! caller-owned and immutable; replacing a column produces a new selection
//! and the projection is a pure function of `(catalog, selection)`.

use serde::Serialize;

use super::catalog::{GrantLevel, PlanCatalog};
use super::error::PricingError;

/// An ordered sequence of plan-name columns chosen by the caller.
///
/// Repeats are legal and the length is independent of the catalog size.
/// Every entry is validated against the catalog at construction and on
/// replacement, so a selection never silently carries an unknown plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSelection {
    columns: Vec<String>,
}

impl ComparisonSelection {
    /// Build a selection, validating every entry against the catalog.
    pub fn new<I, S>(catalog: &PlanCatalog, names: I) -> Result<Self, PricingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = names.into_iter().map(Into::into).collect();
        for name in &columns {
            catalog.get(name)?;
        }
        Ok(Self { columns })
    }

    /// A copy of this selection with the column at `index` replaced.
    ///
    /// Fails with `UnknownPlan` if `new_plan_name` is not in the catalog
    /// and with `ColumnOutOfRange` if `index` is past the end. The input
    /// selection is never mutated.
    pub fn replace_column(
        &self,
        catalog: &PlanCatalog,
        index: usize,
        new_plan_name: &str,
    ) -> Result<Self, PricingError> {
        catalog.get(new_plan_name)?;
        if index >= self.columns.len() {
            return Err(PricingError::ColumnOutOfRange {
                index,
                len: self.columns.len(),
            });
        }

        let mut columns = self.columns.clone();
        columns[index] = new_plan_name.to_string();
        Ok(Self { columns })
    }

    /// Column plan names, in caller order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One grid row: a capability and its grant level per selected column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub capability: String,
    pub cells: Vec<GrantLevel>,
}

/// A capability-by-plan grid.
///
/// Rows follow the catalog's capability declaration order; columns follow
/// the selection's caller order. Selecting the same plan at two indices
/// yields two independent, identical columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureMatrix {
    columns: Vec<String>,
    rows: Vec<FeatureRow>,
}

impl FeatureMatrix {
    /// Project a selection into a grid.
    ///
    /// Re-dereferences every column against the catalog, so a selection
    /// that outlived a catalog swap fails with `UnknownPlan` instead of
    /// rendering stale cells.
    pub fn project(
        catalog: &PlanCatalog,
        selection: &ComparisonSelection,
    ) -> Result<Self, PricingError> {
        let mut plans = Vec::with_capacity(selection.len());
        for name in selection.columns() {
            plans.push(catalog.get(name)?);
        }

        let rows = catalog
            .capabilities()
            .iter()
            .map(|capability| FeatureRow {
                capability: capability.clone(),
                cells: plans.iter().map(|plan| plan.grant(capability)).collect(),
            })
            .collect();

        Ok(Self {
            columns: selection.columns().to_vec(),
            rows,
        })
    }

    /// Column plan names, in selection order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Grid rows, in catalog capability order.
    #[must_use]
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// The cell at `(row, col)`, if both indices are in range.
    #[must_use]
    pub fn grant_at(&self, row: usize, col: usize) -> Option<GrantLevel> {
        self.rows.get(row).and_then(|r| r.cells.get(col)).copied()
    }
}
