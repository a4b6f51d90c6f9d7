//! Read-only Neo4j probes.
//!
//! Nothing here writes to the graph. The constraint check compares what
//! `SHOW CONSTRAINTS` reports against the catalog, and the isolation
//! check surfaces `:Droom` nodes grouped by label so stray brands or
//! unscoped nodes are easy to spot.

use droom_catalog::schema;
use neo4rs::{query, Graph};
use serde::Serialize;

use crate::error::ProbeError;

pub const CONNECTIVITY_PROBE: &str = "RETURN 1 AS ok";

pub const SHOW_DROOM_CONSTRAINTS: &str = "SHOW CONSTRAINTS YIELD name \
     WHERE name STARTS WITH 'droom_' \
     RETURN name ORDER BY name";

// The IS NULL arm counts nodes with no brand_id at all (shared
// attribute nodes) together with the brand's own. Whether legacy
// unscoped nodes should really read as in-brand is an open product
// question; until it is answered this matches production behavior.
pub const BRAND_ISOLATION: &str = "MATCH (n:Droom) \
     WHERE n.brand_id = $brand_id OR n.brand_id IS NULL \
     RETURN labels(n) AS node_labels, COUNT(n) AS count \
     ORDER BY count DESC";

/// A group of `:Droom` nodes sharing the same label set.
#[derive(Debug, Clone, Serialize)]
pub struct LabelGroup {
    pub labels: Vec<String>,
    pub count: i64,
}

pub async fn connectivity(graph: &Graph) -> Result<(), ProbeError> {
    let mut rows = graph.execute(query(CONNECTIVITY_PROBE)).await?;
    while let Some(row) = rows.next().await? {
        let ok: i64 = row.get("ok").unwrap_or(0);
        if ok == 1 {
            return Ok(());
        }
    }
    Err(ProbeError::InvalidResponse(
        "connectivity probe returned no rows".to_string(),
    ))
}

/// Check that every catalog constraint exists, returning the `droom_`
/// constraint names the server reported.
pub async fn constraints_present(graph: &Graph) -> Result<Vec<String>, ProbeError> {
    let mut found = Vec::new();
    let mut rows = graph.execute(query(SHOW_DROOM_CONSTRAINTS)).await?;
    while let Some(row) = rows.next().await? {
        let name: String = row.get("name").unwrap_or_default();
        if !name.is_empty() {
            found.push(name);
        }
    }

    let missing: Vec<&str> = schema::constraint_names()
        .into_iter()
        .filter(|expected| !found.iter().any(|name| name == expected))
        .collect();
    if !missing.is_empty() {
        let found_list = if found.is_empty() {
            "none".to_string()
        } else {
            found.join(", ")
        };
        return Err(ProbeError::Mismatch(format!(
            "missing constraint(s): {}; found: {}",
            missing.join(", "),
            found_list
        )));
    }
    Ok(found)
}

/// Group `:Droom` nodes for one brand (plus any with no brand_id at all)
/// by their label sets.
pub async fn brand_isolation(graph: &Graph, brand_id: &str) -> Result<Vec<LabelGroup>, ProbeError> {
    let mut groups = Vec::new();
    let mut rows = graph
        .execute(query(BRAND_ISOLATION).param("brand_id", brand_id))
        .await?;
    while let Some(row) = rows.next().await? {
        groups.push(LabelGroup {
            labels: row.get("node_labels").unwrap_or_default(),
            count: row.get("count").unwrap_or(0),
        });
    }
    Ok(groups)
}
