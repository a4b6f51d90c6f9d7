//! `verify`: credential-gated checks across every integrated service.

use anyhow::{Context, Result};
use colored::Colorize;
use droom_catalog::BrandProfile;
use droom_verify::{run_checks, select_checks, CheckResult, CheckStatus, Settings, VerifyReport};

const BANNER_WIDTH: usize = 70;

pub async fn run(filter: Option<&str>, format: &str) -> Result<i32> {
    let brand = BrandProfile::eastern_healing_traditions();
    let settings = Settings::from_env();
    let checks = select_checks(filter);

    if checks.is_empty() {
        if let Some(filter) = filter {
            eprintln!(
                "{} no checks match filter '{filter}'",
                "info:".yellow().bold()
            );
        }
    }

    let report = if format == "json" {
        let report = run_checks(&checks, &settings, &brand, |_| {}).await;
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing check report")?
        );
        report
    } else {
        print_banner(&brand);
        let report = run_checks(&checks, &settings, &brand, print_check_line).await;
        print_summary(&report);
        report
    };

    Ok(if report.succeeded() { 0 } else { 1 })
}

fn print_banner(brand: &BrandProfile) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("Integration Checks - {}", brand.brand_name);
    println!("Brand ID: {}", brand.brand_id);
    println!("Business Model: {}", brand.business_model.as_str());
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();
}

fn print_check_line(result: &CheckResult) {
    let status = match result.status {
        CheckStatus::Pass => "[PASS]".green().bold(),
        CheckStatus::Skip => "[SKIP]".yellow().bold(),
        CheckStatus::Fail => "[FAIL]".red().bold(),
    };
    println!("  {} {}: {}", status, result.name, result.message);
}

fn print_summary(report: &VerifyReport) {
    println!(
        "\nSummary: {} passed, {} skipped, {} failed",
        report.passed, report.skipped, report.failed
    );
    if report.succeeded() {
        println!("{}", "All applicable checks passed.".green().bold());
    } else {
        println!(
            "{}",
            format!("{} check(s) failed.", report.failed).red().bold()
        );
    }
}
