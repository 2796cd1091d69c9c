//! Catalog data access.
//!
//! The catalog lives behind an explicit repository interface so that the
//! query engine and the API surfaces never care where the records come from.
//! Today there is a single in-memory implementation fed by the built-in seed
//! or a catalog file; a real backend would implement the same trait without
//! touching the query engine's contract.

use crate::catalog::{Catalog, Opportunity, ServicePoint};

/// Read access to the static catalog.
///
/// Implementations must return records in a stable order across calls; the
/// query engine's output order is defined as a subsequence of this order.
/// There are no error conditions: a constructed repository always answers.
pub trait CatalogRepository {
    /// All opportunities, in authoring order.
    fn opportunities(&self) -> &[Opportunity];

    /// All service points, in authoring order.
    fn service_points(&self) -> &[ServicePoint];

    /// Resolves a selected identifier to its full record.
    ///
    /// Absent ids return `None`, including previously valid ids whose record
    /// has been filtered out of the current visible set. Selection state is
    /// independent of the filtered list; deciding whether to clear a stale
    /// selection is the caller's concern.
    fn resolve(&self, id: &str) -> Option<&Opportunity> {
        self.opportunities().iter().find(|o| o.id == id)
    }
}

/// In-memory catalog repository.
#[derive(Clone, Debug)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    /// Wraps an already-validated catalog.
    ///
    /// Validation happens when the catalog is loaded (see
    /// [`crate::catalog_file::parse`]); the repository itself holds the data
    /// and cannot fail.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn opportunities(&self) -> &[Opportunity] {
        &self.catalog.opportunities
    }

    fn service_points(&self) -> &[ServicePoint] {
        &self.catalog.service_points
    }
}
