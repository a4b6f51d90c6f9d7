//! `index-audit`: read-only report on the shared Pinecone index.
//!
//! With `--format json` the full report is emitted as one JSON object
//! instead of the printed walkthrough.

use anyhow::{Context, Result};
use colored::Colorize;
use droom_catalog::{BrandProfile, EMBEDDING_MODEL, EXPECTED_DIMENSION, EXPECTED_METRIC, INDEX_NAME};
use droom_verify::audit::{wrap_description, DESCRIPTION_WRAP_WIDTH};
use droom_verify::{audit_index, AuditReport, IssueSeverity, PineconeClient, Settings};

const BANNER_WIDTH: usize = 64;

pub async fn run(format: &str) -> Result<i32> {
    let json = format == "json";
    let brand = BrandProfile::eastern_healing_traditions();
    let settings = Settings::from_env();

    let Some(api_key) = settings.pinecone_api_key else {
        eprintln!(
            "{} PINECONE_API_KEY environment variable is not set.",
            "ERROR:".red().bold()
        );
        eprintln!("  Set it in your environment or in .env");
        return Ok(1);
    };

    if !json {
        print_banner(&brand);
    }

    let client = PineconeClient::new(api_key);
    let report = match audit_index(&client, &brand).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("\n{} {e}", "ERROR:".red().bold());
            eprintln!("  This is a shared index that must already be provisioned.");
            eprintln!("  Check your Pinecone dashboard or PINECONE_API_KEY.");
            return Ok(1);
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing audit report")?
        );
    } else {
        print_report(&report);
    }
    Ok(if report.succeeded() { 0 } else { 1 })
}

fn print_banner(brand: &BrandProfile) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("Droom Marketing Factory - Pinecone Index Verification");
    println!("Client: {} ({})", brand.brand_name, brand.brand_id);
    println!("Target index: {INDEX_NAME}");
    println!("Expected dimensions: {EXPECTED_DIMENSION}");
    println!("Embedding model: {EMBEDDING_MODEL}");
    println!("{}", "=".repeat(BANNER_WIDTH));
}

fn print_report(report: &AuditReport) {
    println!("\nAvailable indexes: [{}]", report.available.join(", "));
    println!("\n{} Index '{}' exists.", "[OK]".green(), report.index_name);

    if report.index.dimension == EXPECTED_DIMENSION {
        println!(
            "{} Dimensions: {} (matches {EMBEDDING_MODEL})",
            "[OK]".green(),
            report.index.dimension
        );
    } else {
        println!(
            "{} Dimensions: {} (expected {EXPECTED_DIMENSION} for {EMBEDDING_MODEL})",
            "[FAIL]".red().bold(),
            report.index.dimension
        );
    }
    if report.index.metric == EXPECTED_METRIC {
        println!("{} Metric: {}", "[OK]".green(), report.index.metric);
    } else {
        println!(
            "{} Metric: {} (expected {EXPECTED_METRIC})",
            "[WARN]".yellow().bold(),
            report.index.metric
        );
    }

    println!("\n--- Existing namespaces in index ---");
    if let Some(stats) = &report.stats {
        if stats.namespaces.is_empty() {
            println!("  (no namespaces with data yet)");
        } else {
            for (name, ns) in &stats.namespaces {
                let prefix = if name.starts_with("droom-") {
                    "[droom]"
                } else {
                    "[other]"
                };
                println!("  {} {} ({} vectors)", prefix, name, ns.vector_count);
            }
        }
        println!("\n  Total vectors in index: {}", stats.total_vector_count);
    } else if let Some(error) = &report.stats_error {
        println!(
            "  {} Could not list namespaces: {error}",
            "[WARN]".yellow().bold()
        );
    }

    println!("\n--- Planned namespaces for this client ---");
    println!("  (These will be created automatically on first vector upsert)");
    println!();
    for ns in &report.planned {
        let shared_tag = if ns.shared { " [shared]" } else { "" };
        println!("  {}{}", ns.name, shared_tag);
        for line in wrap_description(ns.description, DESCRIPTION_WRAP_WIDTH) {
            println!("{line}");
        }
        println!();
    }

    println!("--- Namespace conflict check ---");
    let has_existing = report
        .stats
        .as_ref()
        .is_some_and(|stats| !stats.namespaces.is_empty());
    if !has_existing {
        println!("  {} No existing namespaces. Clean slate.", "[OK]".green());
    } else if report.conflicts.is_empty() {
        println!(
            "  {} No conflicts. Client namespaces are clean.",
            "[OK]".green()
        );
    } else {
        println!(
            "  {} These client namespaces already have data:",
            "[WARN]".yellow().bold()
        );
        for (name, count) in &report.conflicts {
            println!("    {name} ({count} vectors)");
        }
        println!("  This is expected if re-running after prior ingestion.");
    }

    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("VERIFICATION SUMMARY");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("  Index '{}': EXISTS", report.index_name);
    println!("  Dimensions: {EXPECTED_DIMENSION}");
    println!("  Metric: {EXPECTED_METRIC}");
    println!("  Embedding model: {EMBEDDING_MODEL}");
    let client_count = report.planned.iter().filter(|ns| !ns.shared).count();
    println!("  Client namespaces planned: {client_count}");
    println!("  Shared namespaces: 1 (droom-cross-campaign-learnings)");

    if report.issues.is_empty() {
        println!("\n  All checks passed. Index is ready for vector upserts.");
    } else {
        println!("\n  ISSUES ({}):", report.issues.len());
        for issue in &report.issues {
            let tag = match issue.severity {
                IssueSeverity::Fail => "[FAIL]".red().bold(),
                IssueSeverity::Warn => "[WARN]".yellow().bold(),
            };
            println!("    {} {}", tag, issue.detail);
        }
    }
}
