//! # Collaboro Core
//!
//! Core domain logic for the Collaboro community mutual-aid platform.
//!
//! This crate contains pure data operations:
//! - The static opportunity/service-point catalog and its strict YAML loader
//! - The query engine computing the visible subset for a filter state
//! - Selection resolution for detail views
//! - The location permission state machine
//! - The expression-of-interest write path (waitlist)
//!
//! **No API concerns**: HTTP servers, OpenAPI documentation, or CLI parsing
//! belong in `api-rest`, `api-shared`, or `cli`.

pub mod catalog;
pub mod catalog_file;
pub mod config;
pub mod error;
pub mod interest;
pub mod location;
pub mod query;
pub mod repository;
pub mod seed;
pub mod validation;

pub use catalog::{Catalog, MapPosition, Opportunity, OpportunityType, ServicePoint, Task};
pub use collaboro_types::{NonEmptyText, Percent};
pub use config::CoreConfig;
pub use error::{CatalogError, CatalogResult, InterestError, InterestResult};
pub use interest::{
    InMemoryInterestStore, InterestRecord, InterestRole, InterestStore, InterestSubmission,
};
pub use location::{LocationPermission, LocationStatus};
pub use query::{FilterState, RadiusKm, TypeFilter, RADIUS_OPTIONS_KM};
pub use repository::{CatalogRepository, InMemoryCatalog};
