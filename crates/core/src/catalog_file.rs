//! Catalog wire model and translation helpers.
//!
//! The catalog can be supplied as a YAML document (`COLLABORO_CATALOG_FILE`).
//! This module defines a strict wire model for that document and translates
//! it into domain types, validating the catalog invariants on the way in:
//!
//! - opportunity and service-point ids unique within the catalog,
//! - task ids unique within their parent opportunity,
//! - distances finite and non-negative,
//! - map positions inside the 0–100 percent panel,
//! - at least one category per opportunity (the first one is primary in
//!   compact views).
//!
//! Sequence order in the document is authoring order and is preserved
//! verbatim by translation; the query engine relies on it.

use crate::catalog::{Catalog, MapPosition, Opportunity, OpportunityType, ServicePoint, Task};
use crate::error::{CatalogError, CatalogResult};
use collaboro_types::Percent;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Parse a catalog from YAML text.
///
/// This uses `serde_path_to_error` to surface a best-effort "path"
/// (e.g. `opportunities[3].distance_km`) to the failing field when the YAML
/// does not match the wire schema.
///
/// # Errors
///
/// Returns [`CatalogError::SchemaMismatch`] if the document does not match
/// the wire schema (including unknown keys, rejected by
/// `#[serde(deny_unknown_fields)]`), or the relevant validation variant if
/// the document is well-formed but violates a catalog invariant.
pub fn parse(yaml_text: &str) -> CatalogResult<Catalog> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    let wire = match serde_path_to_error::deserialize::<_, CatalogWire>(deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            };
            return Err(CatalogError::SchemaMismatch { path, source });
        }
    };

    wire_to_domain(wire)
}

/// Render a catalog as YAML text.
///
/// The output round-trips through [`parse`] and preserves authoring order.
///
/// # Errors
///
/// Returns [`CatalogError::Serialization`] if serialization fails.
pub fn render(catalog: &Catalog) -> CatalogResult<String> {
    let wire = domain_to_wire(catalog);
    serde_yaml::to_string(&wire).map_err(CatalogError::Serialization)
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct CatalogWire {
    opportunities: Vec<OpportunityWire>,
    #[serde(default)]
    service_points: Vec<ServicePointWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct OpportunityWire {
    id: String,
    name: String,
    neighborhood: String,
    #[serde(rename = "type")]
    opportunity_type: OpportunityType,
    verified: bool,
    distance_km: f64,
    categories: Vec<String>,
    short_description: String,
    #[serde(default)]
    tasks: Vec<TaskWire>,
    map_position: MapPositionWire,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct TaskWire {
    id: String,
    title: String,
    description: String,
    duration: String,
    when: String,
    #[serde(default)]
    youth_friendly: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct ServicePointWire {
    id: String,
    name: String,
    neighborhood: String,
    verified: bool,
    map_position: MapPositionWire,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct MapPositionWire {
    x: f64,
    y: f64,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn map_position(id: &str, wire: MapPositionWire) -> CatalogResult<MapPosition> {
    let x = Percent::new(wire.x).map_err(|e| {
        CatalogError::InvalidInput(format!("map position x of {id} out of range: {e}"))
    })?;
    let y = Percent::new(wire.y).map_err(|e| {
        CatalogError::InvalidInput(format!("map position y of {id} out of range: {e}"))
    })?;
    Ok(MapPosition { x, y })
}

fn require_non_blank(what: &str, id: &str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidInput(format!(
            "{what} of {id} cannot be blank"
        )));
    }
    Ok(())
}

fn wire_to_domain(wire: CatalogWire) -> CatalogResult<Catalog> {
    let mut opportunity_ids = HashSet::new();
    let mut opportunities = Vec::with_capacity(wire.opportunities.len());

    for opportunity in wire.opportunities {
        if opportunity.id.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "opportunity id cannot be blank".into(),
            ));
        }
        if !opportunity_ids.insert(opportunity.id.clone()) {
            return Err(CatalogError::DuplicateOpportunityId(opportunity.id));
        }
        require_non_blank("name", &opportunity.id, &opportunity.name)?;

        if !opportunity.distance_km.is_finite() || opportunity.distance_km < 0.0 {
            return Err(CatalogError::InvalidDistance {
                id: opportunity.id,
                distance_km: opportunity.distance_km,
            });
        }

        if opportunity.categories.is_empty() {
            return Err(CatalogError::InvalidInput(format!(
                "opportunity {} must have at least one category",
                opportunity.id
            )));
        }

        let mut task_ids = HashSet::new();
        let mut tasks = Vec::with_capacity(opportunity.tasks.len());
        for task in opportunity.tasks {
            require_non_blank("task id", &opportunity.id, &task.id)?;
            require_non_blank("task title", &opportunity.id, &task.title)?;
            if !task_ids.insert(task.id.clone()) {
                return Err(CatalogError::DuplicateTaskId {
                    opportunity_id: opportunity.id,
                    task_id: task.id,
                });
            }
            tasks.push(Task {
                id: task.id,
                title: task.title,
                description: task.description,
                duration: task.duration,
                when: task.when,
                youth_friendly: task.youth_friendly,
            });
        }

        let position = map_position(&opportunity.id, opportunity.map_position)?;
        opportunities.push(Opportunity {
            map_position: position,
            id: opportunity.id,
            name: opportunity.name,
            neighborhood: opportunity.neighborhood,
            opportunity_type: opportunity.opportunity_type,
            verified: opportunity.verified,
            distance_km: opportunity.distance_km,
            categories: opportunity.categories,
            short_description: opportunity.short_description,
            tasks,
        });
    }

    let mut service_point_ids = HashSet::new();
    let mut service_points = Vec::with_capacity(wire.service_points.len());
    for point in wire.service_points {
        if point.id.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "service point id cannot be blank".into(),
            ));
        }
        if !service_point_ids.insert(point.id.clone()) {
            return Err(CatalogError::DuplicateServicePointId(point.id));
        }
        require_non_blank("name", &point.id, &point.name)?;

        let position = map_position(&point.id, point.map_position)?;
        service_points.push(ServicePoint {
            map_position: position,
            id: point.id,
            name: point.name,
            neighborhood: point.neighborhood,
            verified: point.verified,
        });
    }

    Ok(Catalog {
        opportunities,
        service_points,
    })
}

fn domain_to_wire(catalog: &Catalog) -> CatalogWire {
    CatalogWire {
        opportunities: catalog
            .opportunities
            .iter()
            .map(|opportunity| OpportunityWire {
                id: opportunity.id.clone(),
                name: opportunity.name.clone(),
                neighborhood: opportunity.neighborhood.clone(),
                opportunity_type: opportunity.opportunity_type,
                verified: opportunity.verified,
                distance_km: opportunity.distance_km,
                categories: opportunity.categories.clone(),
                short_description: opportunity.short_description.clone(),
                tasks: opportunity
                    .tasks
                    .iter()
                    .map(|task| TaskWire {
                        id: task.id.clone(),
                        title: task.title.clone(),
                        description: task.description.clone(),
                        duration: task.duration.clone(),
                        when: task.when.clone(),
                        youth_friendly: task.youth_friendly,
                    })
                    .collect(),
                map_position: MapPositionWire {
                    x: opportunity.map_position.x.value(),
                    y: opportunity.map_position.y.value(),
                },
            })
            .collect(),
        service_points: catalog
            .service_points
            .iter()
            .map(|point| ServicePointWire {
                id: point.id.clone(),
                name: point.name.clone(),
                neighborhood: point.neighborhood.clone(),
                verified: point.verified,
                map_position: MapPositionWire {
                    x: point.map_position.x.value(),
                    y: point.map_position.y.value(),
                },
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"opportunities:
  - id: obnl-rosemont
    name: "Centre d'entraide Rosemont"
    neighborhood: "Rosemont–La Petite-Patrie"
    type: nonprofit
    verified: true
    distance_km: 2.1
    categories: ["Alimentation", "Familles"]
    short_description: "Aide à préparer et distribuer des paniers alimentaires."
    map_position: { x: 65, y: 40 }
    tasks:
      - id: t1
        title: "Préparation de paniers alimentaires"
        description: "Tri des aliments, montage des paniers."
        duration: "~3 h"
        when: "Samedi matin, 9 h – 12 h"
        youth_friendly: true
service_points:
  - id: sp-plateau-biblio
    name: "Bibliothèque du Plateau-Mont-Royal"
    neighborhood: "Plateau-Mont-Royal"
    verified: true
    map_position: { x: 52, y: 48 }
"#;

    #[test]
    fn round_trips_sample_yaml() {
        let catalog = parse(SAMPLE).expect("parse yaml");
        let output = render(&catalog).expect("render catalog");
        let reparsed = parse(&output).expect("reparse yaml");
        assert_eq!(catalog, reparsed);
    }

    #[test]
    fn preserves_category_and_record_order() {
        let catalog = parse(SAMPLE).expect("parse yaml");
        let rosemont = &catalog.opportunities[0];
        assert_eq!(rosemont.categories, vec!["Alimentation", "Familles"]);
        assert_eq!(rosemont.primary_category(), Some("Alimentation"));
        assert_eq!(rosemont.tasks[0].id, "t1");
        assert!(rosemont.tasks[0].youth_friendly);
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = SAMPLE.replace("    verified: true\n", "    verified: true\n    rating: 5\n");
        let err = parse(&input).expect_err("should reject unknown key");
        match err {
            CatalogError::SchemaMismatch { path, .. } => {
                assert!(path.contains("opportunities"), "path was {path}");
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_distance() {
        let input = SAMPLE.replace("distance_km: 2.1", "distance_km: -0.5");
        let err = parse(&input).expect_err("should reject negative distance");
        match err {
            CatalogError::InvalidDistance { id, distance_km } => {
                assert_eq!(id, "obnl-rosemont");
                assert_eq!(distance_km, -0.5);
            }
            other => panic!("expected InvalidDistance, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_map_position() {
        let input = SAMPLE.replace("map_position: { x: 65, y: 40 }", "map_position: { x: 165, y: 40 }");
        let err = parse(&input).expect_err("should reject x > 100");
        match err {
            CatalogError::InvalidInput(msg) => assert!(msg.contains("obnl-rosemont")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_opportunity_ids() {
        let catalog = parse(SAMPLE).expect("parse yaml");
        let mut doubled = catalog.clone();
        doubled.opportunities.extend(catalog.opportunities.clone());
        let yaml = render(&doubled).expect("render catalog");
        let err = parse(&yaml).expect_err("should reject duplicate id");
        match err {
            CatalogError::DuplicateOpportunityId(id) => assert_eq!(id, "obnl-rosemont"),
            other => panic!("expected DuplicateOpportunityId, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_task_ids_within_one_opportunity() {
        let input = SAMPLE.replace(
            "      - id: t1\n",
            "      - id: t1\n        title: x\n        description: x\n        duration: x\n        when: x\n      - id: t1\n",
        );
        // The replacement produces two tasks sharing id t1.
        let err = parse(&input).expect_err("should reject duplicate task id");
        match err {
            CatalogError::DuplicateTaskId {
                opportunity_id,
                task_id,
            } => {
                assert_eq!(opportunity_id, "obnl-rosemont");
                assert_eq!(task_id, "t1");
            }
            other => panic!("expected DuplicateTaskId, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_category_list() {
        let input = SAMPLE.replace("categories: [\"Alimentation\", \"Familles\"]", "categories: []");
        let err = parse(&input).expect_err("should reject empty categories");
        match err {
            CatalogError::InvalidInput(msg) => assert!(msg.contains("at least one category")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn tasks_default_to_empty_and_not_youth_friendly() {
        let input = SAMPLE
            .replace("        youth_friendly: true\n", "")
            .replace("service_points:", "  - id: obnl-bare\n    name: Bare\n    neighborhood: Villeray\n    type: nonprofit\n    verified: false\n    distance_km: 0\n    categories: [\"Divers\"]\n    short_description: \"\"\n    map_position: { x: 0, y: 100 }\nservice_points:");
        let catalog = parse(&input).expect("parse yaml");
        assert!(!catalog.opportunities[0].tasks[0].youth_friendly);
        assert!(catalog.opportunities[1].tasks.is_empty());
        assert_eq!(catalog.opportunities[1].distance_km, 0.0);
    }
}
