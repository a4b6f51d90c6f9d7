//! Declarative catalog for the Droom marketing graph.
//!
//! This crate is the single source of truth for everything the setup tooling
//! declares against external stores: graph constraints and indexes, the
//! shared attribute taxonomy, per-client seed records, Pinecone namespace
//! plans, and the expected vector-index configuration. It performs no I/O;
//! the reconciler and verifier crates consume these tables and are the only
//! places that talk to services.
//!
//! Identity rules live here too: tenant-scoped records derive their graph id
//! from `(brand_id, name)` via [`record_id`], which is what makes the seed
//! merges idempotent across re-runs.

pub mod attributes;
pub mod brand;
pub mod namespaces;
pub mod schema;
pub mod seeds;

pub use attributes::{shared_attributes, AttributeCategory};
pub use brand::{BrandProfile, BusinessModel};
pub use namespaces::{
    client_namespaces, planned_namespaces, shared_namespace, NamespaceDef, EMBEDDING_MODEL,
    EXPECTED_DIMENSION, EXPECTED_METRIC, INDEX_NAME,
};
pub use schema::{constraint_names, constraints, indexes, ConstraintDef, IndexDef};
pub use seeds::{demographic_segments, geographic_zones, DemographicSegment, GeoZone};

/// Reserved label every node written by the setup tooling must carry.
/// Queries and writes outside this label scope are out of bounds.
pub const DROOM_LABEL: &str = "Droom";

/// Shared S3 bucket holding all client assets.
pub const S3_BUCKET: &str = "droom";

/// Derive the graph id for a tenant-scoped record.
///
/// The id is a pure function of `(brand_id, name)` so re-running setup always
/// merges onto the same node instead of creating a sibling.
pub fn record_id(brand_id: &str, name: &str) -> String {
    format!("{brand_id}--{name}")
}

/// S3 key prefix under which a client's assets live.
pub fn client_key_prefix(brand_id: &str) -> String {
    format!("clients/{brand_id}/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn record_id_joins_brand_and_name() {
        assert_eq!(
            record_id("eastern-healing-traditions", "core"),
            "eastern-healing-traditions--core"
        );
    }

    #[test]
    fn client_key_prefix_is_slash_terminated() {
        let prefix = client_key_prefix("eastern-healing-traditions");
        assert_eq!(prefix, "clients/eastern-healing-traditions/");
        assert!(prefix.ends_with('/'));
    }

    proptest! {
        #[test]
        fn record_id_is_deterministic(brand in "[a-z][a-z0-9-]{0,30}", name in "[a-z][a-z0-9-]{0,30}") {
            let first = record_id(&brand, &name);
            let second = record_id(&brand, &name);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.starts_with(brand.as_str()));
            prop_assert!(first.ends_with(name.as_str()));
        }

        #[test]
        fn record_id_separator_splits_back(brand in "[a-z]{1,20}", name in "[a-z]{1,20}") {
            // Inputs without the separator recover exactly on split.
            let id = record_id(&brand, &name);
            let (left, right) = id.split_once("--").expect("separator present");
            prop_assert_eq!(left, brand.as_str());
            prop_assert_eq!(right, name.as_str());
        }
    }
}
