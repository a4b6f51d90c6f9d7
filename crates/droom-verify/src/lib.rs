//! Service verification for Droom client setup.
//!
//! A verification run is a sequence of independent checks against the
//! services a client depends on: the Neo4j graph, the shared Pinecone
//! index, the S3 media bucket, and the two model APIs. A check whose
//! credentials are absent reports a skip instead of a failure, so the suite
//! is useful on a fresh checkout with no `.env` at all. Only failures make
//! a run unsuccessful.
//!
//! The [`audit`] module produces the read-only Pinecone index report that
//! documents namespace plans and flags configuration drift.

pub mod audit;
pub mod error;
pub mod graph_checks;
pub mod harness;
pub mod llm;
pub mod object_store;
pub mod pinecone;
pub mod settings;

pub use audit::{audit_index, AuditIssue, AuditReport, IssueSeverity};
pub use error::ProbeError;
pub use harness::{
    run_check, run_checks, select_checks, CheckId, CheckResult, CheckStatus, Service, VerifyReport,
};
pub use pinecone::{IndexDescription, IndexStats, NamespaceStats, PineconeClient};
pub use settings::Settings;
