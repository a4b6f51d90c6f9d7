//! Error classes shared by every probe.
//!
//! The classes matter more than the payloads: the harness turns any error
//! into a failed check, but operators read the class to know whether to fix
//! a credential, a network path, or the service configuration itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Access denied: {0}")]
    Forbidden(String),
    #[error("Configuration mismatch: {0}")]
    Mismatch(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<neo4rs::Error> for ProbeError {
    fn from(e: neo4rs::Error) -> Self {
        ProbeError::Api(e.to_string())
    }
}
