//! Opportunity query engine.
//!
//! Computes the visible subset of the catalog for a given filter state. The
//! engine is a pure function of (catalog, filter state): no I/O, no clock, no
//! error conditions. Any input produces a valid, possibly empty output:
//! "no results in this radius" is a displayable state, not a failure.
//!
//! Filters are conjunctive and applied in a fixed order: capability gate,
//! type, radius, text. Output preserves catalog order (stable filter, no
//! re-sort).

use crate::catalog::{Opportunity, OpportunityType};
use crate::error::{CatalogError, CatalogResult};

/// The closed set of selectable search radii, in kilometres.
pub const RADIUS_OPTIONS_KM: [u32; 4] = [1, 3, 5, 10];

/// A validated search radius.
///
/// Only the four presented radii exist; arbitrary values are rejected at the
/// filter-state boundary via [`RadiusKm::try_from_km`], never inside the
/// engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadiusKm {
    Km1,
    #[default]
    Km3,
    Km5,
    Km10,
}

impl RadiusKm {
    /// Validates a kilometre count against the closed set of allowed radii.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnsupportedRadius`] for any value outside
    /// `{1, 3, 5, 10}`.
    pub fn try_from_km(km: u32) -> CatalogResult<Self> {
        match km {
            1 => Ok(RadiusKm::Km1),
            3 => Ok(RadiusKm::Km3),
            5 => Ok(RadiusKm::Km5),
            10 => Ok(RadiusKm::Km10),
            other => Err(CatalogError::UnsupportedRadius(other)),
        }
    }

    /// The radius in kilometres.
    pub fn km(&self) -> f64 {
        match self {
            RadiusKm::Km1 => 1.0,
            RadiusKm::Km3 => 3.0,
            RadiusKm::Km5 => 5.0,
            RadiusKm::Km10 => 10.0,
        }
    }
}

impl std::fmt::Display for RadiusKm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km", self.km())
    }
}

/// Which organisation types the user wants to see.
///
/// Defaults to nonprofit, matching the platform's help-nonprofits-first
/// stance; `All` corresponds to the "Tous" toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    Nonprofit,
    Business,
    All,
}

impl std::str::FromStr for TypeFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nonprofit" => Ok(TypeFilter::Nonprofit),
            "business" => Ok(TypeFilter::Business),
            "all" => Ok(TypeFilter::All),
            other => Err(CatalogError::UnknownTypeFilter(other.to_string())),
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::Nonprofit => write!(f, "nonprofit"),
            TypeFilter::Business => write!(f, "business"),
            TypeFilter::All => write!(f, "all"),
        }
    }
}

/// User-chosen criteria driving the query engine.
///
/// Owned by the presentation layer and passed by value into every
/// evaluation; the engine holds no state between calls.
#[derive(Clone, Debug)]
pub struct FilterState {
    /// Free-text query; blank or whitespace-only means "no text filter".
    pub search: String,
    pub radius: RadiusKm,
    pub type_filter: TypeFilter,
    /// Capability gate: when false, business listings are excluded regardless
    /// of `type_filter`.
    pub include_business_listings: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            radius: RadiusKm::default(),
            type_filter: TypeFilter::default(),
            include_business_listings: true,
        }
    }
}

/// Computes the visible subset of `opportunities` for `filter`.
///
/// All enabled filters are conjunctive, applied in order: capability gate,
/// type, radius, text. The result preserves the input order and borrows from
/// the input slice.
pub fn visible<'a>(opportunities: &'a [Opportunity], filter: &FilterState) -> Vec<&'a Opportunity> {
    let query = normalized_query(&filter.search);

    opportunities
        .iter()
        .filter(|opportunity| {
            if !filter.include_business_listings
                && opportunity.opportunity_type == OpportunityType::Business
            {
                return false;
            }

            match filter.type_filter {
                TypeFilter::Nonprofit
                    if opportunity.opportunity_type != OpportunityType::Nonprofit =>
                {
                    return false;
                }
                TypeFilter::Business
                    if opportunity.opportunity_type != OpportunityType::Business =>
                {
                    return false;
                }
                _ => {}
            }

            if opportunity.distance_km > filter.radius.km() {
                return false;
            }

            match &query {
                None => true,
                Some(query) => haystack(opportunity).contains(query.as_str()),
            }
        })
        .collect()
}

/// Lowercased, trimmed query text, or `None` when the text stage is disabled.
fn normalized_query(search: &str) -> Option<String> {
    let trimmed = search.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Synthesizes the searchable text of one record: name, neighborhood, short
/// description, categories, and each task's title and description.
///
/// Linear per-record work with no memoization. Fine at this catalog size;
/// revisit with precomputed lowercase fields if the catalog ever grows.
fn haystack(opportunity: &Opportunity) -> String {
    let mut parts: Vec<String> = vec![
        opportunity.name.clone(),
        opportunity.neighborhood.clone(),
        opportunity.short_description.clone(),
        opportunity.categories.join(" "),
    ];
    parts.extend(
        opportunity
            .tasks
            .iter()
            .map(|task| format!("{} {}", task.title, task.description)),
    );
    parts.join(" ").to_lowercase()
}
