//! Minimal Pinecone REST client.
//!
//! Covers exactly the two calls the checks need: listing indexes on the
//! control plane and describing stats on an index host. Response structs
//! ignore fields we do not read so API additions never break parsing.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

const CONTROL_PLANE_URL: &str = "https://api.pinecone.io";
const API_VERSION: &str = "2024-07";
const REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct PineconeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// One index as reported by the control plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDescription {
    pub name: String,
    pub dimension: u32,
    pub metric: String,
    pub host: String,
}

#[derive(Debug, Deserialize)]
struct IndexList {
    #[serde(default)]
    indexes: Vec<IndexDescription>,
}

/// Vector statistics from an index host. The data plane reports
/// camelCase keys, unlike the control plane.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    #[serde(default)]
    pub namespaces: BTreeMap<String, NamespaceStats>,
    #[serde(default)]
    pub dimension: u32,
    #[serde(default)]
    pub total_vector_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceStats {
    #[serde(default)]
    pub vector_count: u64,
}

impl PineconeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, CONTROL_PLANE_URL)
    }

    /// Point the control-plane calls at a different base URL. Used by
    /// tests that stand in for the live API.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_indexes(&self) -> Result<Vec<IndexDescription>, ProbeError> {
        let response = self
            .http
            .get(format!("{}/indexes", self.base_url))
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .send()
            .await
            .map_err(|e| ProbeError::Network(e.to_string()))?;

        let response = check_status(response).await?;
        let list: IndexList = response
            .json()
            .await
            .map_err(|e| ProbeError::InvalidResponse(e.to_string()))?;
        Ok(list.indexes)
    }

    /// POST an empty stats request to the index host. The control plane
    /// returns hosts without a scheme, so one is added when absent.
    pub async fn describe_index_stats(&self, host: &str) -> Result<IndexStats, ProbeError> {
        let url = if host.starts_with("http://") || host.starts_with("https://") {
            format!("{}/describe_index_stats", host.trim_end_matches('/'))
        } else {
            format!("https://{}/describe_index_stats", host.trim_end_matches('/'))
        };

        let response = self
            .http
            .post(url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| ProbeError::Network(e.to_string()))?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ProbeError::InvalidResponse(e.to_string()))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProbeError> {
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(ProbeError::Auth(format!(
            "{status} (check PINECONE_API_KEY)"
        )));
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ProbeError::NotFound(format!("{status}")));
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ProbeError::Api(format!("{status}: {text}")));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_list_tolerates_unknown_fields() {
        let body = r#"{
            "indexes": [
                {
                    "name": "graphelion-deux",
                    "dimension": 1536,
                    "metric": "cosine",
                    "host": "graphelion-deux-abc123.svc.aped-4627-b74a.pinecone.io",
                    "spec": {"serverless": {"cloud": "aws", "region": "us-east-1"}},
                    "status": {"ready": true, "state": "Ready"}
                }
            ]
        }"#;
        let list: IndexList = serde_json::from_str(body).unwrap();
        assert_eq!(list.indexes.len(), 1);
        assert_eq!(list.indexes[0].name, "graphelion-deux");
        assert_eq!(list.indexes[0].dimension, 1536);
        assert_eq!(list.indexes[0].metric, "cosine");
    }

    #[test]
    fn empty_index_list_parses() {
        let list: IndexList = serde_json::from_str("{}").unwrap();
        assert!(list.indexes.is_empty());
    }

    #[test]
    fn stats_parse_camel_case_keys() {
        let body = r#"{
            "namespaces": {
                "droom-content-essence-eastern-healing-traditions": {"vectorCount": 42},
                "droom-cross-campaign-learnings": {"vectorCount": 0}
            },
            "dimension": 1536,
            "indexFullness": 0.0,
            "totalVectorCount": 42
        }"#;
        let stats: IndexStats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.dimension, 1536);
        assert_eq!(stats.total_vector_count, 42);
        assert_eq!(
            stats.namespaces["droom-content-essence-eastern-healing-traditions"].vector_count,
            42
        );
    }

    #[test]
    fn stats_without_namespaces_default_to_empty() {
        let stats: IndexStats = serde_json::from_str(r#"{"dimension": 1536}"#).unwrap();
        assert!(stats.namespaces.is_empty());
        assert_eq!(stats.total_vector_count, 0);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PineconeClient::with_base_url("key", "http://localhost:9000/");
        assert_eq!(client.base_url, "http://localhost:9000");
    }
}
