//! Schema reconciliation runner.
//!
//! Applies the whole catalog in a fixed order: constraints, indexes, shared
//! attributes, demographics, geographic zones. A failed statement is
//! recorded in the summary and the run keeps going, so one pass reports
//! every problem instead of stopping at the first.

use droom_catalog::{
    constraints, demographic_segments, geographic_zones, indexes, shared_attributes, BrandProfile,
};
use neo4rs::{query, Graph, Query};
use serde::Serialize;
use tracing::{debug, warn};

use crate::statements;

// ============================================================================
// Events
// ============================================================================

/// Phases of a reconcile run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcilePhase {
    Constraints,
    Indexes,
    SharedAttributes,
    Demographics,
    GeographicZones,
}

impl ReconcilePhase {
    /// Heading printed when the phase starts.
    pub fn title(&self) -> &'static str {
        match self {
            ReconcilePhase::Constraints => "Creating constraints (IF NOT EXISTS)",
            ReconcilePhase::Indexes => "Creating indexes (IF NOT EXISTS)",
            ReconcilePhase::SharedAttributes => "Merging shared attribute nodes",
            ReconcilePhase::Demographics => "Merging demographic nodes",
            ReconcilePhase::GeographicZones => "Merging geographic nodes",
        }
    }
}

/// Events emitted while reconciliation runs.
#[derive(Debug, Clone, Serialize)]
pub enum ReconcileEvent {
    /// A phase is starting.
    PhaseStarted { phase: ReconcilePhase },
    /// One statement applied cleanly.
    Applied { phase: ReconcilePhase, item: String },
    /// One statement failed; the run continues.
    Failed {
        phase: ReconcilePhase,
        item: String,
        error: String,
    },
}

/// Callback for reconcile events.
pub type ReconcileEventHandler = Box<dyn Fn(ReconcileEvent) + Send + Sync>;

// ============================================================================
// Summary
// ============================================================================

/// Counts of applied statements plus every error captured along the way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconcileSummary {
    pub constraints_applied: usize,
    pub indexes_applied: usize,
    pub shared_attribute_nodes: usize,
    pub demographic_nodes: usize,
    pub geographic_nodes: usize,
    pub errors: Vec<String>,
}

impl ReconcileSummary {
    /// True when every statement applied cleanly.
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    fn record_ok(&mut self, phase: ReconcilePhase) {
        match phase {
            ReconcilePhase::Constraints => self.constraints_applied += 1,
            ReconcilePhase::Indexes => self.indexes_applied += 1,
            ReconcilePhase::SharedAttributes => self.shared_attribute_nodes += 1,
            ReconcilePhase::Demographics => self.demographic_nodes += 1,
            ReconcilePhase::GeographicZones => self.geographic_nodes += 1,
        }
    }
}

// ============================================================================
// Reconciler
// ============================================================================

/// Applies the catalog to one database for one brand.
pub struct Reconciler {
    graph: Graph,
    brand: BrandProfile,
    event_handlers: Vec<ReconcileEventHandler>,
}

impl Reconciler {
    pub fn new(graph: Graph, brand: BrandProfile) -> Self {
        Self {
            graph,
            brand,
            event_handlers: Vec::new(),
        }
    }

    /// Add an event handler.
    pub fn on_event(&mut self, handler: ReconcileEventHandler) {
        self.event_handlers.push(handler);
    }

    fn emit(&self, event: ReconcileEvent) {
        for handler in &self.event_handlers {
            handler(event.clone());
        }
    }

    /// Apply every statement in catalog order. Infallible by construction:
    /// statement failures land in the summary, not in a Result.
    pub async fn run(&self) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();

        self.emit(ReconcileEvent::PhaseStarted {
            phase: ReconcilePhase::Constraints,
        });
        for def in constraints() {
            self.apply(
                ReconcilePhase::Constraints,
                def.name,
                query(def.cypher),
                &mut summary,
            )
            .await;
        }

        self.emit(ReconcileEvent::PhaseStarted {
            phase: ReconcilePhase::Indexes,
        });
        for def in indexes() {
            self.apply(
                ReconcilePhase::Indexes,
                def.name,
                query(def.cypher),
                &mut summary,
            )
            .await;
        }

        self.emit(ReconcileEvent::PhaseStarted {
            phase: ReconcilePhase::SharedAttributes,
        });
        for category in shared_attributes() {
            for value in category.values {
                let item = format!(":Droom:{} {{name: '{}'}}", category.label, value);
                self.apply(
                    ReconcilePhase::SharedAttributes,
                    &item,
                    statements::merge_attribute(category.label, value),
                    &mut summary,
                )
                .await;
            }
        }

        self.emit(ReconcileEvent::PhaseStarted {
            phase: ReconcilePhase::Demographics,
        });
        for segment in demographic_segments() {
            let item = format!(":Droom:Demographic {{name: '{}'}}", segment.name);
            self.apply(
                ReconcilePhase::Demographics,
                &item,
                statements::merge_demographic(&self.brand, segment),
                &mut summary,
            )
            .await;
        }

        self.emit(ReconcileEvent::PhaseStarted {
            phase: ReconcilePhase::GeographicZones,
        });
        for zone in geographic_zones() {
            let item = format!(":Droom:Geographic {{name: '{}'}}", zone.name);
            self.apply(
                ReconcilePhase::GeographicZones,
                &item,
                statements::merge_geographic(&self.brand, zone),
                &mut summary,
            )
            .await;
        }

        summary
    }

    async fn apply(
        &self,
        phase: ReconcilePhase,
        item: &str,
        q: Query,
        summary: &mut ReconcileSummary,
    ) {
        match self.graph.run(q).await {
            Ok(()) => {
                debug!(item, "statement applied");
                summary.record_ok(phase);
                self.emit(ReconcileEvent::Applied {
                    phase,
                    item: item.to_string(),
                });
            }
            Err(e) => {
                warn!(item, error = %e, "statement failed");
                summary.errors.push(format!("{item}: {e}"));
                self.emit(ReconcileEvent::Failed {
                    phase,
                    item: item.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }
}

/// Number of statements a clean run applies, for progress reporting.
pub fn planned_statement_count() -> usize {
    let attribute_values: usize = shared_attributes().iter().map(|c| c.values.len()).sum();
    constraints().len() + indexes().len() + attribute_values + demographic_segments().len()
        + geographic_zones().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_succeeds_only_without_errors() {
        let mut summary = ReconcileSummary::default();
        assert!(summary.succeeded());
        summary.record_ok(ReconcilePhase::Constraints);
        summary.record_ok(ReconcilePhase::SharedAttributes);
        assert!(summary.succeeded());
        summary
            .errors
            .push("droom_lead_email: connection reset".to_string());
        assert!(!summary.succeeded());
    }

    #[test]
    fn record_ok_routes_to_the_right_counter() {
        let mut summary = ReconcileSummary::default();
        summary.record_ok(ReconcilePhase::Constraints);
        summary.record_ok(ReconcilePhase::Indexes);
        summary.record_ok(ReconcilePhase::Indexes);
        summary.record_ok(ReconcilePhase::Demographics);
        summary.record_ok(ReconcilePhase::GeographicZones);
        assert_eq!(summary.constraints_applied, 1);
        assert_eq!(summary.indexes_applied, 2);
        assert_eq!(summary.shared_attribute_nodes, 0);
        assert_eq!(summary.demographic_nodes, 1);
        assert_eq!(summary.geographic_nodes, 1);
    }

    #[test]
    fn a_clean_run_applies_sixty_seven_statements() {
        assert_eq!(planned_statement_count(), 7 + 12 + 42 + 3 + 3);
    }

    #[test]
    fn mixed_outcomes_tally_exactly() {
        let mut summary = ReconcileSummary::default();
        for _ in 0..5 {
            summary.record_ok(ReconcilePhase::SharedAttributes);
        }
        summary.errors.push("item-a: boom".to_string());
        summary.errors.push("item-b: boom".to_string());
        assert_eq!(summary.shared_attribute_nodes, 5);
        assert_eq!(summary.errors.len(), 2);
        assert!(!summary.succeeded());
    }

    #[test]
    fn phases_serialize_snake_case() {
        let json = serde_json::to_string(&ReconcilePhase::SharedAttributes).unwrap();
        assert_eq!(json, "\"shared_attributes\"");
    }

    #[test]
    fn events_serialize_with_item_context() {
        let event = ReconcileEvent::Failed {
            phase: ReconcilePhase::Indexes,
            item: "droom_lead_email".to_string(),
            error: "boom".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["Failed"]["phase"], "indexes");
        assert_eq!(json["Failed"]["item"], "droom_lead_email");
    }
}
