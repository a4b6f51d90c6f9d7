//! `graph-init`: reconcile the Neo4j schema and seed nodes.
//!
//! Prints a phase-ordered progress log as statements apply, then the
//! initialization summary. Per-statement failures are collected and
//! reported at the end; only connection problems abort the run early.
//! With `--format json` the progress log is suppressed and the summary
//! is emitted as one JSON object.

use anyhow::{Context, Result};
use colored::Colorize;
use droom_catalog::BrandProfile;
use droom_graph::{
    planned_statement_count, verify_connectivity, GraphSettings, ReconcileEvent, ReconcileSummary,
    Reconciler,
};

const BANNER_WIDTH: usize = 64;

pub async fn run(format: &str) -> Result<i32> {
    let json = format == "json";
    let brand = BrandProfile::eastern_healing_traditions();

    let settings = match GraphSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{} {e}", "ERROR:".red().bold());
            eprintln!("  Set NEO4J_URI, NEO4J_USERNAME, NEO4J_PASSWORD in your environment");
            eprintln!("  or in .env");
            return Ok(1);
        }
    };

    if !json {
        print_banner(&brand, &settings.uri);
    }

    // Opening the pool does not dial the server; bad credentials and
    // unreachable hosts surface on verify_connectivity below.
    let graph = match settings.connect().await {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("\n{} Failed to connect to Neo4j: {e}", "ERROR:".red().bold());
            return Ok(1);
        }
    };
    if let Err(e) = verify_connectivity(&graph).await {
        eprintln!(
            "\n{} Cannot reach Neo4j at {}: {e}",
            "ERROR:".red().bold(),
            settings.uri
        );
        eprintln!("  Check the URI and credentials, and that the instance is running.");
        return Ok(1);
    }
    if !json {
        println!("\nConnected to Neo4j successfully.");
        println!(
            "Applying {} statements across schema and seed phases.",
            planned_statement_count()
        );
    }

    let mut reconciler = Reconciler::new(graph, brand);
    if !json {
        reconciler.on_event(Box::new(|event| match event {
            ReconcileEvent::PhaseStarted { phase } => {
                println!("\n--- {} ---", phase.title());
            }
            ReconcileEvent::Applied { item, .. } => {
                println!("  {} {}", "[OK]".green(), item);
            }
            ReconcileEvent::Failed { item, error, .. } => {
                println!("  {} {}: {}", "[FAIL]".red().bold(), item, error);
            }
        }));
    }

    let summary = reconciler.run().await;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serializing reconcile summary")?
        );
    } else {
        print_summary(&summary);
    }

    Ok(if summary.succeeded() { 0 } else { 1 })
}

fn print_banner(brand: &BrandProfile, uri: &str) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("Droom Marketing Factory - Neo4j Schema Initialization");
    println!("Client: {} ({})", brand.brand_name, brand.brand_id);
    println!("Business model: {}", brand.business_model.as_str());
    let leads = if brand.business_model.lead_capture_enabled() {
        "ENABLED"
    } else {
        "SKIPPED"
    };
    println!("  -> Lead/WebsiteForm nodes: {leads}");
    if brand.business_model.purchase_tracking_enabled() {
        println!("  -> Customer/Purchase nodes: ENABLED");
    } else {
        println!("  -> Customer/Purchase nodes: SKIPPED (not e-commerce)");
    }
    println!("Target: {uri}");
    println!("{}", "=".repeat(BANNER_WIDTH));
}

fn print_summary(summary: &ReconcileSummary) {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("INITIALIZATION SUMMARY");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!(
        "  Constraints created/verified: {}",
        summary.constraints_applied
    );
    println!(
        "  Indexes created/verified:     {}",
        summary.indexes_applied
    );
    println!(
        "  Shared attribute nodes:       {}",
        summary.shared_attribute_nodes
    );
    println!(
        "  Demographic nodes:            {}",
        summary.demographic_nodes
    );
    println!(
        "  Geographic nodes:             {}",
        summary.geographic_nodes
    );

    if summary.errors.is_empty() {
        println!("\n  All operations completed successfully.");
        println!("  The schema is ready for content ingestion.");
    } else {
        println!("\n  ERRORS ({}):", summary.errors.len());
        for err in &summary.errors {
            println!("    {} {}", "[FAIL]".red().bold(), err);
        }
    }
}
