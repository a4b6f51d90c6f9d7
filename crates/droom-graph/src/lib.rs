//! Neo4j side of Droom client setup.
//!
//! Takes the declarative catalog from `droom-catalog` and reconciles a live
//! database against it: uniqueness constraints, property indexes, the shared
//! attribute taxonomy, and the client's seed records. Every statement is
//! idempotent, so the reconciler can run on a fresh instance or a populated
//! one and converge on the same state either way.

pub mod client;
pub mod reconcile;
pub mod statements;

pub use client::{verify_connectivity, GraphSettings, SettingsError};
pub use reconcile::{
    planned_statement_count, ReconcileEvent, ReconcileEventHandler, ReconcilePhase,
    ReconcileSummary, Reconciler,
};
