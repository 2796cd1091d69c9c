//! Catalog domain model.
//!
//! The catalog is the complete, static set of opportunity and service-point
//! records. It is defined once at startup (built-in seed or a YAML file) and
//! is immutable for the process lifetime; nothing in this crate creates,
//! mutates, or destroys a record at runtime.
//!
//! Display strings are carried in the data itself, in the language they were
//! authored in. Filtering always matches on these underlying fields, never on
//! localized labels.

use collaboro_types::Percent;
use serde::{Deserialize, Serialize};

/// The kind of organisation behind an opportunity.
///
/// Closed enumeration: community nonprofits are the platform's priority,
/// local businesses may post one-off paid-nothing favours when the
/// business-listing capability is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityType {
    Nonprofit,
    Business,
}

impl std::fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpportunityType::Nonprofit => write!(f, "nonprofit"),
            OpportunityType::Business => write!(f, "business"),
        }
    }
}

/// Illustrative placement on the non-georeferenced map panel.
///
/// Both coordinates are percentages of the panel's width and height. They are
/// not geographic coordinates and are never involved in distance filtering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub x: Percent,
    pub y: Percent,
}

/// A concrete sub-activity belonging to one opportunity.
///
/// `duration` and `when` are free-text scheduling descriptions, not
/// machine-parseable intervals; they are displayed verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    /// Unique within the parent opportunity, not globally.
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub when: String,
    /// Informational flag carried from the authoring data; filtering does not
    /// use it.
    pub youth_friendly: bool,
}

/// A volunteering or one-off-help listing shown to end users.
#[derive(Clone, Debug, PartialEq)]
pub struct Opportunity {
    /// Unique within the catalog, stable for the catalog's lifetime.
    pub id: String,
    pub name: String,
    pub neighborhood: String,
    pub opportunity_type: OpportunityType,
    /// Purely informational; no verification workflow exists.
    pub verified: bool,
    /// Fixed at data-authoring time, never recomputed from a live location.
    pub distance_km: f64,
    /// Order is significant: the first category is treated as primary in
    /// compact views, so loading must preserve it.
    pub categories: Vec<String>,
    pub short_description: String,
    pub tasks: Vec<Task>,
    pub map_position: MapPosition,
}

impl Opportunity {
    /// The category shown in compact views: the first of the ordered list.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}

/// A recommended safe meeting location, independent of any opportunity.
#[derive(Clone, Debug, PartialEq)]
pub struct ServicePoint {
    pub id: String,
    pub name: String,
    pub neighborhood: String,
    pub verified: bool,
    pub map_position: MapPosition,
}

/// The complete static data set: opportunities and service points, in
/// authoring order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub opportunities: Vec<Opportunity>,
    pub service_points: Vec<ServicePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position() -> MapPosition {
        MapPosition {
            x: Percent::new(50.0).expect("in range"),
            y: Percent::new(50.0).expect("in range"),
        }
    }

    #[test]
    fn primary_category_is_first_in_authoring_order() {
        let opportunity = Opportunity {
            id: "obnl-test".into(),
            name: "Test".into(),
            neighborhood: "Rosemont".into(),
            opportunity_type: OpportunityType::Nonprofit,
            verified: true,
            distance_km: 2.0,
            categories: vec!["Alimentation".into(), "Familles".into()],
            short_description: "".into(),
            tasks: vec![],
            map_position: position(),
        };
        assert_eq!(opportunity.primary_category(), Some("Alimentation"));
    }

    #[test]
    fn primary_category_of_empty_list_is_none() {
        let opportunity = Opportunity {
            id: "obnl-test".into(),
            name: "Test".into(),
            neighborhood: "Rosemont".into(),
            opportunity_type: OpportunityType::Nonprofit,
            verified: true,
            distance_km: 2.0,
            categories: vec![],
            short_description: "".into(),
            tasks: vec![],
            map_position: position(),
        };
        assert_eq!(opportunity.primary_category(), None);
    }

    #[test]
    fn opportunity_type_round_trips_through_display() {
        assert_eq!(OpportunityType::Nonprofit.to_string(), "nonprofit");
        assert_eq!(OpportunityType::Business.to_string(), "business");
    }
}
