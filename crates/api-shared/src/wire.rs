//! REST wire types.
//!
//! The exact JSON structures exchanged with clients, with OpenAPI schemas.
//! These mirror the domain model field for field but stay independent of it:
//! the domain can evolve without silently changing the wire, and the wire
//! carries only what clients need.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Generic error payload for non-2xx responses.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub message: String,
}

/// Illustrative placement on the map panel, in percent of panel size.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema)]
pub struct MapPositionRes {
    pub x: f64,
    pub y: f64,
}

/// One sub-activity of an opportunity.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TaskRes {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub when: String,
    pub youth_friendly: bool,
}

/// A volunteering or one-off-help listing.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OpportunityRes {
    pub id: String,
    pub name: String,
    pub neighborhood: String,
    /// `nonprofit` or `business`.
    #[serde(rename = "type")]
    pub opportunity_type: String,
    pub verified: bool,
    pub distance_km: f64,
    /// Ordered; the first category is primary in compact views.
    pub categories: Vec<String>,
    pub short_description: String,
    pub tasks: Vec<TaskRes>,
    pub map_position: MapPositionRes,
}

/// Filtered opportunity listing.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListOpportunitiesRes {
    pub opportunities: Vec<OpportunityRes>,
    /// Size of the visible subset, for "N opportunités dans ce rayon" labels.
    pub total: usize,
}

/// A recommended safe meeting location.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ServicePointRes {
    pub id: String,
    pub name: String,
    pub neighborhood: String,
    pub verified: bool,
    pub map_position: MapPositionRes,
}

/// Service point listing.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListServicePointsRes {
    pub service_points: Vec<ServicePointRes>,
}

/// Expression-of-interest submission.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateInterestReq {
    pub first_name: String,
    pub email: String,
    /// `volunteer`, `nonprofit`, or `business`; absent when the form's role
    /// select was left on its placeholder.
    pub role: Option<String>,
    pub neighborhood: Option<String>,
    pub motivation: String,
}

/// Acknowledgement of a recorded expression of interest.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateInterestRes {
    pub id: String,
    /// The canonical (lowercased) email the interest was recorded under.
    pub email: String,
}
