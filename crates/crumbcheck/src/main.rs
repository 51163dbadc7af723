//! crumbcheck CLI: scan a content tree, or verify breadcrumbs on the live
//! site.
//!
//! Logging: set `RUST_LOG=crumbcheck=debug` (or `info`, `warn`) to control
//! verbosity; logs go to stderr, report output to stdout.

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use crumbcheck::{HttpPageSource, Report, run_checks};
use crumbcheck_scanner::{ContentScanner, FixtureRecord, ScanConfig};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: RUST_LOG overrides; default info for this crate.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("crumbcheck=info,crumbcheck_scanner=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Command::Scan {
            root,
            strip_prefix,
            base_url,
            json,
        } => {
            let config = ScanConfig::new()
                .with_root(root)
                .with_strip_prefix(strip_prefix)
                .with_base_url(base_url);
            let records = ContentScanner::new().scan(&config)?;
            print_records(&records, json)?;
            Ok(())
        }
        Command::Verify {
            root,
            strip_prefix,
            base_url,
            json,
        } => {
            let config = ScanConfig::new()
                .with_root(root)
                .with_strip_prefix(strip_prefix)
                .with_base_url(base_url.clone());
            let records = ContentScanner::new().scan(&config)?;

            let base = Url::parse(&base_url).with_context(|| format!("invalid base url {base_url}"))?;
            let source = HttpPageSource::new(base);
            let report = run_checks(&source, &records).await;
            print_report(&report, json)?;

            if report.is_ok() {
                Ok(())
            } else {
                anyhow::bail!(
                    "{} of {} checks failed",
                    report.failed(),
                    report.outcomes.len()
                )
            }
        }
    }
}

fn print_records(records: &[FixtureRecord], json: bool) -> anyhow::Result<()> {
    if json {
        for record in records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        for record in records {
            println!("{}\t{}\t{}", record.route, record.title, record.canonical_url);
        }
        println!("{} pages", records.len());
    }
    Ok(())
}

fn print_report(report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        for outcome in &report.outcomes {
            match &outcome.result {
                Ok(()) => println!("PASS  {}", outcome.route),
                Err(failure) => println!("FAIL  {}  {failure}", outcome.route),
            }
        }
        println!("{} passed, {} failed", report.passed(), report.failed());
    }
    Ok(())
}
