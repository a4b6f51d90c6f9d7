//! Check registry, gating, and aggregation.
//!
//! Every check is independent. Gating happens before any client is
//! built: a check whose credentials are absent reports a skip naming
//! the missing variables, and a skip never counts against the run.

use droom_catalog::{
    client_key_prefix, constraint_names, planned_namespaces, BrandProfile, NamespaceDef,
    EMBEDDING_MODEL, EXPECTED_DIMENSION, EXPECTED_METRIC, INDEX_NAME, S3_BUCKET,
};
use serde::Serialize;
use tracing::debug;

use crate::error::ProbeError;
use crate::pinecone::{IndexDescription, IndexStats, PineconeClient};
use crate::settings::Settings;
use crate::{graph_checks, llm, object_store};

/// External collaborator a check talks to. Doubles as the filter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Neo4j,
    Pinecone,
    S3,
    Anthropic,
    Openai,
}

impl Service {
    pub fn tag(&self) -> &'static str {
        match self {
            Service::Neo4j => "neo4j",
            Service::Pinecone => "pinecone",
            Service::S3 => "s3",
            Service::Anthropic => "anthropic",
            Service::Openai => "openai",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Skip,
    Fail,
}

/// Outcome of a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub service: Service,
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckId {
    Neo4jConnectivity,
    Neo4jConstraints,
    Neo4jBrandIsolation,
    PineconeIndexExists,
    PineconeIndexConfig,
    PineconeNamespaces,
    S3BucketExists,
    S3PrefixListable,
    AnthropicMessages,
    OpenAiEmbeddings,
}

impl CheckId {
    pub const ALL: [CheckId; 10] = [
        CheckId::Neo4jConnectivity,
        CheckId::Neo4jConstraints,
        CheckId::Neo4jBrandIsolation,
        CheckId::PineconeIndexExists,
        CheckId::PineconeIndexConfig,
        CheckId::PineconeNamespaces,
        CheckId::S3BucketExists,
        CheckId::S3PrefixListable,
        CheckId::AnthropicMessages,
        CheckId::OpenAiEmbeddings,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CheckId::Neo4jConnectivity => "neo4j-connectivity",
            CheckId::Neo4jConstraints => "neo4j-constraints",
            CheckId::Neo4jBrandIsolation => "neo4j-brand-isolation",
            CheckId::PineconeIndexExists => "pinecone-index-exists",
            CheckId::PineconeIndexConfig => "pinecone-index-config",
            CheckId::PineconeNamespaces => "pinecone-namespaces",
            CheckId::S3BucketExists => "s3-bucket-exists",
            CheckId::S3PrefixListable => "s3-prefix-listable",
            CheckId::AnthropicMessages => "anthropic-messages",
            CheckId::OpenAiEmbeddings => "openai-embeddings",
        }
    }

    pub fn service(&self) -> Service {
        match self {
            CheckId::Neo4jConnectivity
            | CheckId::Neo4jConstraints
            | CheckId::Neo4jBrandIsolation => Service::Neo4j,
            CheckId::PineconeIndexExists
            | CheckId::PineconeIndexConfig
            | CheckId::PineconeNamespaces => Service::Pinecone,
            CheckId::S3BucketExists | CheckId::S3PrefixListable => Service::S3,
            CheckId::AnthropicMessages => Service::Anthropic,
            CheckId::OpenAiEmbeddings => Service::Openai,
        }
    }

    /// Substring match against the check name, like `-k` filters in
    /// other test runners. A service tag selects that service's checks.
    pub fn matches(&self, filter: &str) -> bool {
        self.name().contains(filter)
    }

    fn missing_credentials(&self, settings: &Settings) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self.service() {
            Service::Neo4j => {
                if settings.neo4j_uri.is_none() {
                    missing.push("NEO4J_URI");
                }
                if settings.neo4j_username.is_none() {
                    missing.push("NEO4J_USERNAME");
                }
                if settings.neo4j_password.is_none() {
                    missing.push("NEO4J_PASSWORD");
                }
            }
            Service::Pinecone => {
                if settings.pinecone_api_key.is_none() {
                    missing.push("PINECONE_API_KEY");
                }
            }
            Service::S3 => {
                if settings.aws_access_key_id.is_none() {
                    missing.push("AWS_ACCESS_KEY_ID");
                }
                if settings.aws_secret_access_key.is_none() {
                    missing.push("AWS_SECRET_ACCESS_KEY");
                }
            }
            Service::Anthropic => {
                if settings.anthropic_api_key.is_none() {
                    missing.push("ANTHROPIC_API_KEY");
                }
            }
            Service::Openai => {
                if settings.openai_api_key.is_none() {
                    missing.push("OPENAI_API_KEY");
                }
            }
        }
        missing
    }
}

/// Resolve a name filter to the checks that will run. No filter selects
/// everything.
pub fn select_checks(filter: Option<&str>) -> Vec<CheckId> {
    CheckId::ALL
        .into_iter()
        .filter(|check| filter.map_or(true, |f| check.matches(f)))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub checks: Vec<CheckResult>,
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl VerifyReport {
    pub fn from_checks(checks: Vec<CheckResult>) -> Self {
        let passed = checks
            .iter()
            .filter(|check| check.status == CheckStatus::Pass)
            .count();
        let skipped = checks
            .iter()
            .filter(|check| check.status == CheckStatus::Skip)
            .count();
        let failed = checks
            .iter()
            .filter(|check| check.status == CheckStatus::Fail)
            .count();
        Self {
            checks,
            passed,
            skipped,
            failed,
        }
    }

    /// Skips never count against the run.
    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Gate one check on its credentials, then run it.
pub async fn run_check(id: CheckId, settings: &Settings, brand: &BrandProfile) -> CheckResult {
    let missing = id.missing_credentials(settings);
    if !missing.is_empty() {
        return CheckResult {
            name: id.name(),
            service: id.service(),
            status: CheckStatus::Skip,
            message: format!("missing env var(s): {}", missing.join(", ")),
        };
    }

    debug!(check = id.name(), "running check");
    match execute(id, settings, brand).await {
        Ok(message) => CheckResult {
            name: id.name(),
            service: id.service(),
            status: CheckStatus::Pass,
            message,
        },
        Err(e) => CheckResult {
            name: id.name(),
            service: id.service(),
            status: CheckStatus::Fail,
            message: e.to_string(),
        },
    }
}

/// Run checks strictly in order, reporting each result as it lands.
/// One check failing never stops the rest.
pub async fn run_checks(
    ids: &[CheckId],
    settings: &Settings,
    brand: &BrandProfile,
    mut on_result: impl FnMut(&CheckResult),
) -> VerifyReport {
    let mut checks = Vec::with_capacity(ids.len());
    for &id in ids {
        let result = run_check(id, settings, brand).await;
        on_result(&result);
        checks.push(result);
    }
    VerifyReport::from_checks(checks)
}

fn require<'a>(value: &'a Option<String>, var: &str) -> Result<&'a str, ProbeError> {
    value
        .as_deref()
        .ok_or_else(|| ProbeError::Auth(format!("{var} is not set")))
}

fn pinecone_client(settings: &Settings) -> Result<PineconeClient, ProbeError> {
    let api_key = require(&settings.pinecone_api_key, "PINECONE_API_KEY")?;
    Ok(PineconeClient::new(api_key))
}

fn s3_client(settings: &Settings) -> Result<aws_sdk_s3::Client, ProbeError> {
    let access_key_id = require(&settings.aws_access_key_id, "AWS_ACCESS_KEY_ID")?;
    let secret_access_key = require(&settings.aws_secret_access_key, "AWS_SECRET_ACCESS_KEY")?;
    Ok(object_store::client(access_key_id, secret_access_key))
}

async fn neo4j_graph(settings: &Settings) -> Result<neo4rs::Graph, ProbeError> {
    let graph_settings = settings
        .graph()
        .ok_or_else(|| ProbeError::Auth("Neo4j credentials are not set".to_string()))?;
    Ok(graph_settings.connect().await?)
}

/// One segment per planned namespace, present-with-count or not yet
/// created. Namespaces appear on first upsert, so absence is normal.
fn namespace_breakdown(planned: &[NamespaceDef], stats: &IndexStats) -> String {
    planned
        .iter()
        .map(|ns| match stats.namespaces.get(&ns.name) {
            Some(existing) => format!("'{}': {} vectors", ns.name, existing.vector_count),
            None => format!("'{}': not yet created", ns.name),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

async fn find_index(client: &PineconeClient) -> Result<IndexDescription, ProbeError> {
    let indexes = client.list_indexes().await?;
    let names: Vec<&str> = indexes.iter().map(|index| index.name.as_str()).collect();
    indexes
        .iter()
        .find(|index| index.name == INDEX_NAME)
        .cloned()
        .ok_or_else(|| {
            ProbeError::NotFound(format!(
                "index '{INDEX_NAME}' not found; available: [{}]",
                names.join(", ")
            ))
        })
}

async fn execute(
    id: CheckId,
    settings: &Settings,
    brand: &BrandProfile,
) -> Result<String, ProbeError> {
    match id {
        CheckId::Neo4jConnectivity => {
            let graph = neo4j_graph(settings).await?;
            graph_checks::connectivity(&graph).await?;
            Ok("connectivity OK".to_string())
        }
        CheckId::Neo4jConstraints => {
            let graph = neo4j_graph(settings).await?;
            graph_checks::constraints_present(&graph).await?;
            Ok(format!(
                "all {} Droom constraints verified",
                constraint_names().len()
            ))
        }
        CheckId::Neo4jBrandIsolation => {
            let graph = neo4j_graph(settings).await?;
            let groups = graph_checks::brand_isolation(&graph, brand.brand_id).await?;
            Ok(format!(
                "isolation query OK ({} label group(s) returned)",
                groups.len()
            ))
        }
        CheckId::PineconeIndexExists => {
            let client = pinecone_client(settings)?;
            let index = find_index(&client).await?;
            Ok(format!("index '{}' exists", index.name))
        }
        CheckId::PineconeIndexConfig => {
            let client = pinecone_client(settings)?;
            let index = find_index(&client).await?;
            let stats = client.describe_index_stats(&index.host).await?;
            if stats.dimension != EXPECTED_DIMENSION {
                return Err(ProbeError::Mismatch(format!(
                    "expected {EXPECTED_DIMENSION} dimensions, got {}",
                    stats.dimension
                )));
            }
            let mut message = format!("dimensions: {} ({EMBEDDING_MODEL})", stats.dimension);
            // A metric mismatch is worth flagging but not failing over.
            if index.metric != EXPECTED_METRIC {
                message.push_str(&format!(
                    "; metric: {} (expected {EXPECTED_METRIC})",
                    index.metric
                ));
            }
            Ok(message)
        }
        CheckId::PineconeNamespaces => {
            let client = pinecone_client(settings)?;
            let index = find_index(&client).await?;
            let stats = client.describe_index_stats(&index.host).await?;
            let planned = planned_namespaces(brand.brand_id);
            Ok(namespace_breakdown(&planned, &stats))
        }
        CheckId::S3BucketExists => {
            let client = s3_client(settings)?;
            object_store::bucket_exists(&client, S3_BUCKET).await?;
            Ok(format!("bucket '{S3_BUCKET}' exists and is accessible"))
        }
        CheckId::S3PrefixListable => {
            let client = s3_client(settings)?;
            let prefix = client_key_prefix(brand.brand_id);
            let count = object_store::prefix_object_count(&client, S3_BUCKET, &prefix).await?;
            Ok(format!(
                "prefix '{prefix}' is listable ({count} object(s) found)"
            ))
        }
        CheckId::AnthropicMessages => {
            let api_key = require(&settings.anthropic_api_key, "ANTHROPIC_API_KEY")?;
            llm::anthropic_message_probe(api_key).await?;
            Ok("messages endpoint OK".to_string())
        }
        CheckId::OpenAiEmbeddings => {
            let api_key = require(&settings.openai_api_key, "OPENAI_API_KEY")?;
            let dimensions = llm::openai_embedding_probe(api_key).await?;
            Ok(format!("embeddings OK ({dimensions} dimensions)"))
        }
    }
}
