//! Live probes against the two model providers.
//!
//! Each probe issues the cheapest real call the API offers, so a pass
//! proves the key works end to end rather than just being well formed.

use std::time::Duration;

use droom_catalog::{EMBEDDING_MODEL, EXPECTED_DIMENSION};

use crate::error::ProbeError;

const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const ANTHROPIC_PROBE_MODEL: &str = "claude-sonnet-4-20250514";
const OPENAI_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";
const PROBE_TIMEOUT_SECS: u64 = 60;

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Send a 16-token message request and check a content block comes back.
pub async fn anthropic_message_probe(api_key: &str) -> Result<(), ProbeError> {
    let response = http_client()
        .post(ANTHROPIC_URL)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .header("Content-Type", "application/json")
        .json(&serde_json::json!({
            "model": ANTHROPIC_PROBE_MODEL,
            "max_tokens": 16,
            "messages": [{"role": "user", "content": "Respond with only: OK"}]
        }))
        .send()
        .await
        .map_err(|e| ProbeError::Network(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ProbeError::Auth(
            "authentication failed (check ANTHROPIC_API_KEY)".to_string(),
        ));
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ProbeError::Api(format!("{status}: {text}")));
    }

    let data: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ProbeError::InvalidResponse(e.to_string()))?;
    match data["content"].as_array() {
        Some(blocks) if !blocks.is_empty() => Ok(()),
        _ => Err(ProbeError::InvalidResponse(
            "response had no content blocks".to_string(),
        )),
    }
}

/// Embed one short string and check the vector comes back at the
/// dimension the index is built for.
pub async fn openai_embedding_probe(api_key: &str) -> Result<usize, ProbeError> {
    let response = http_client()
        .post(OPENAI_EMBEDDINGS_URL)
        .header("Authorization", format!("Bearer {api_key}"))
        .header("Content-Type", "application/json")
        .json(&serde_json::json!({
            "model": EMBEDDING_MODEL,
            "input": "integration test"
        }))
        .send()
        .await
        .map_err(|e| ProbeError::Network(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ProbeError::Auth(
            "authentication failed (check OPENAI_API_KEY)".to_string(),
        ));
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ProbeError::Api(format!("{status}: {text}")));
    }

    let data: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ProbeError::InvalidResponse(e.to_string()))?;
    let dimensions = data["data"][0]["embedding"]
        .as_array()
        .map(|embedding| embedding.len())
        .ok_or_else(|| ProbeError::InvalidResponse("missing embedding in response".to_string()))?;

    if dimensions != EXPECTED_DIMENSION as usize {
        return Err(ProbeError::Mismatch(format!(
            "expected {EXPECTED_DIMENSION} dimensions, got {dimensions}"
        )));
    }
    Ok(dimensions)
}
