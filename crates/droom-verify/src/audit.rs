//! Read-only configuration audit of the shared vector index.
//!
//! The audit creates nothing. Namespaces appear implicitly on first
//! upsert, so the report documents which ones this client plans to use
//! and which already hold data, alongside the index configuration
//! itself.

use droom_catalog::{
    planned_namespaces, BrandProfile, NamespaceDef, EMBEDDING_MODEL, EXPECTED_DIMENSION,
    EXPECTED_METRIC, INDEX_NAME,
};
use serde::Serialize;

use crate::error::ProbeError;
use crate::pinecone::{IndexDescription, IndexStats, PineconeClient};

/// Wrap column for namespace descriptions in the printed report.
pub const DESCRIPTION_WRAP_WIDTH: usize = 74;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Fail,
    Warn,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditIssue {
    pub severity: IssueSeverity,
    pub detail: String,
}

/// Everything the audit learned about the index. Statistics are
/// best-effort: a data-plane failure degrades to `stats_error` instead
/// of aborting the audit.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub index_name: String,
    pub available: Vec<String>,
    pub index: IndexDescription,
    pub stats: Option<IndexStats>,
    pub stats_error: Option<String>,
    pub planned: Vec<NamespaceDef>,
    pub conflicts: Vec<(String, u64)>,
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn succeeded(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Audit the shared index for one client. Listing failures and a
/// missing index are fatal; everything past that accumulates into the
/// report.
pub async fn audit_index(
    client: &PineconeClient,
    brand: &BrandProfile,
) -> Result<AuditReport, ProbeError> {
    let indexes = client.list_indexes().await?;
    let available: Vec<String> = indexes.iter().map(|index| index.name.clone()).collect();
    let index = indexes
        .into_iter()
        .find(|index| index.name == INDEX_NAME)
        .ok_or_else(|| {
            ProbeError::NotFound(format!(
                "index '{INDEX_NAME}' does not exist; available: [{}]",
                available.join(", ")
            ))
        })?;

    let issues = configuration_issues(&index);

    let (stats, stats_error) = match client.describe_index_stats(&index.host).await {
        Ok(stats) => (Some(stats), None),
        Err(e) => (None, Some(e.to_string())),
    };

    let planned = planned_namespaces(brand.brand_id);
    let conflicts = match &stats {
        Some(stats) => namespace_conflicts(&planned, stats),
        None => Vec::new(),
    };

    Ok(AuditReport {
        index_name: INDEX_NAME.to_string(),
        available,
        index,
        stats,
        stats_error,
        planned,
        conflicts,
        issues,
    })
}

fn configuration_issues(index: &IndexDescription) -> Vec<AuditIssue> {
    let mut issues = Vec::new();
    if index.dimension != EXPECTED_DIMENSION {
        issues.push(AuditIssue {
            severity: IssueSeverity::Fail,
            detail: format!(
                "dimensions: {} (expected {EXPECTED_DIMENSION} for {EMBEDDING_MODEL})",
                index.dimension
            ),
        });
    }
    if index.metric != EXPECTED_METRIC {
        issues.push(AuditIssue {
            severity: IssueSeverity::Warn,
            detail: format!("metric: {} (expected {EXPECTED_METRIC})", index.metric),
        });
    }
    issues
}

// Shared namespaces are expected to hold data already; only the
// client's own namespaces count as conflicts.
fn namespace_conflicts(planned: &[NamespaceDef], stats: &IndexStats) -> Vec<(String, u64)> {
    planned
        .iter()
        .filter(|ns| !ns.shared)
        .filter_map(|ns| {
            stats
                .namespaces
                .get(&ns.name)
                .map(|existing| (ns.name.clone(), existing.vector_count))
        })
        .collect()
}

/// Greedy word wrap with a four-space indent, for printing namespace
/// descriptions.
pub fn wrap_description(text: &str, width: usize) -> Vec<String> {
    const INDENT: &str = "    ";
    let mut lines = Vec::new();
    let mut line = String::from(INDENT);
    for word in text.split_whitespace() {
        if line.len() + word.len() + 1 > width {
            lines.push(line);
            line = format!("{INDENT}{word}");
        } else if line.trim().is_empty() {
            line = format!("{INDENT}{word}");
        } else {
            line.push(' ');
            line.push_str(word);
        }
    }
    if !line.trim().is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pinecone::NamespaceStats;
    use proptest::prelude::*;

    fn index(dimension: u32, metric: &str) -> IndexDescription {
        IndexDescription {
            name: INDEX_NAME.to_string(),
            dimension,
            metric: metric.to_string(),
            host: "graphelion-deux-abc123.svc.pinecone.io".to_string(),
        }
    }

    #[test]
    fn correct_configuration_raises_no_issues() {
        assert!(configuration_issues(&index(1536, "cosine")).is_empty());
    }

    #[test]
    fn dimension_mismatch_is_a_failure() {
        let issues = configuration_issues(&index(768, "cosine"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Fail);
        assert!(issues[0].detail.contains("768"));
        assert!(issues[0].detail.contains("1536"));
    }

    #[test]
    fn metric_mismatch_is_a_warning() {
        let issues = configuration_issues(&index(1536, "dotproduct"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Warn);
        assert!(issues[0].detail.contains("dotproduct"));
    }

    #[test]
    fn conflicts_ignore_shared_and_absent_namespaces() {
        let brand = BrandProfile::eastern_healing_traditions();
        let planned = planned_namespaces(brand.brand_id);

        let mut stats = IndexStats::default();
        stats.namespaces.insert(
            format!("droom-content-essence-{}", brand.brand_id),
            NamespaceStats { vector_count: 17 },
        );
        stats.namespaces.insert(
            "droom-cross-campaign-learnings".to_string(),
            NamespaceStats { vector_count: 900 },
        );
        stats.namespaces.insert(
            "droom-content-essence-some-other-brand".to_string(),
            NamespaceStats { vector_count: 5 },
        );

        let conflicts = namespace_conflicts(&planned, &stats);
        assert_eq!(
            conflicts,
            vec![(
                format!("droom-content-essence-{}", brand.brand_id),
                17u64
            )]
        );
    }

    #[test]
    fn report_succeeds_only_without_issues() {
        let mut report = AuditReport {
            index_name: INDEX_NAME.to_string(),
            available: vec![INDEX_NAME.to_string()],
            index: index(1536, "cosine"),
            stats: None,
            stats_error: Some("timeout".to_string()),
            planned: Vec::new(),
            conflicts: Vec::new(),
            issues: Vec::new(),
        };
        assert!(report.succeeded());

        report.issues = configuration_issues(&index(768, "cosine"));
        assert!(!report.succeeded());
    }

    #[test]
    fn wrap_keeps_lines_inside_the_width() {
        let brand = BrandProfile::eastern_healing_traditions();
        for ns in planned_namespaces(brand.brand_id) {
            for line in wrap_description(ns.description, DESCRIPTION_WRAP_WIDTH) {
                assert!(line.len() <= DESCRIPTION_WRAP_WIDTH, "too wide: {line:?}");
                assert!(line.starts_with("    "));
            }
        }
    }

    #[test]
    fn wrap_preserves_every_word() {
        let text = "Semantic profiles of creative assets embedded from narrative descriptions";
        let lines = wrap_description(text, 30);
        let rejoined: Vec<&str> = lines
            .iter()
            .flat_map(|line| line.split_whitespace())
            .collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
        assert!(lines.len() > 1);
    }

    #[test]
    fn short_text_wraps_to_a_single_line() {
        let lines = wrap_description("one two", DESCRIPTION_WRAP_WIDTH);
        assert_eq!(lines, vec!["    one two".to_string()]);
    }

    proptest! {
        #[test]
        fn wrap_is_lossless_and_bounded(
            words in proptest::collection::vec("[a-z]{1,10}", 1..40),
            width in 20usize..100
        ) {
            let text = words.join(" ");
            let lines = wrap_description(&text, width);
            let rejoined: Vec<&str> = lines
                .iter()
                .flat_map(|line| line.split_whitespace())
                .collect();
            let original: Vec<&str> = words.iter().map(String::as_str).collect();
            prop_assert_eq!(rejoined, original);
            for line in &lines {
                prop_assert!(line.starts_with("    "), "missing indent: {:?}", line);
                prop_assert!(line.len() <= width, "wider than {}: {:?}", width, line);
                prop_assert!(!line.trim().is_empty());
            }
        }
    }
}
