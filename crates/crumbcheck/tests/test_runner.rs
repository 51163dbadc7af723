//! Integration tests for the check runner - per-record independence and
//! report aggregation, using an in-memory page source.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;

use crumbcheck::{CheckFailure, PageError, PageSource, run_checks};
use crumbcheck_scanner::FixtureRecord;

/// Page source serving canned HTML keyed by route; unknown routes 404.
struct StaticPages(HashMap<String, String>);

impl StaticPages {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self(
            pages
                .iter()
                .map(|(route, html)| ((*route).to_string(), (*html).to_string()))
                .collect(),
        )
    }
}

#[async_trait]
impl PageSource for StaticPages {
    async fn fetch(&self, route: &str) -> Result<String, PageError> {
        self.0.get(route).cloned().ok_or_else(|| PageError::Status {
            url: route.to_string(),
            status: 404,
        })
    }
}

fn record(route: &str, title: &str) -> FixtureRecord {
    FixtureRecord {
        route: route.to_string(),
        source: PathBuf::from(format!("content/{route}index.md")),
        canonical_url: format!("https://www.cloudwithchris.com/{route}"),
        title: title.to_string(),
        description: None,
    }
}

fn breadcrumb_page(names: &[&str]) -> String {
    let entries: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!(r#"{{"position":{},"name":"{name}"}}"#, i + 1))
        .collect();
    format!(
        r#"<html><head><script type="application/ld+json" id="meta-breadcrumbs">{{"itemListElement":[{}]}}</script></head></html>"#,
        entries.join(",")
    )
}

#[tokio::test]
async fn test_all_checks_pass() {
    let source = StaticPages::new(&[
        ("episode/1/", &breadcrumb_page(&["Home", "Episodes", "One"])),
        ("episode/2/", &breadcrumb_page(&["Home", "Two"])),
    ]);
    let records = vec![record("episode/1/", "One"), record("episode/2/", "Two")];

    let report = run_checks(&source, &records).await;
    assert!(report.is_ok());
    assert_eq!(report.passed(), 2);
}

#[tokio::test]
async fn test_failures_are_isolated() {
    let source = StaticPages::new(&[
        ("a/", &breadcrumb_page(&["Home", "Wrong Title"])),
        ("b/", &breadcrumb_page(&["Only One"])),
        ("c/", &breadcrumb_page(&["Home", "C"])),
    ]);
    let records = vec![
        record("a/", "A"),
        record("b/", "Only One"),
        record("c/", "C"),
        record("missing/", "Missing"),
    ];

    let report = run_checks(&source, &records).await;

    // Every record got its own outcome, in execution order, and the two
    // failures did not stop the later checks.
    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 3);

    assert!(matches!(
        report.outcomes[0].result,
        Err(CheckFailure::TitleMismatch { .. })
    ));
    assert!(matches!(
        report.outcomes[1].result,
        Err(CheckFailure::TrailTooShort(1))
    ));
    assert!(report.outcomes[2].passed());
    assert!(matches!(
        report.outcomes[3].result,
        Err(CheckFailure::Fetch(PageError::Status { status: 404, .. }))
    ));
}

#[tokio::test]
async fn test_outcomes_named_by_route() {
    let source = StaticPages::new(&[("episode/42/", &breadcrumb_page(&["Home", "Episode 42"]))]);
    let records = vec![record("episode/42/", "Episode 42")];

    let report = run_checks(&source, &records).await;
    assert_eq!(report.outcomes[0].route, "episode/42/");
    assert_eq!(report.outcomes[0].title, "Episode 42");
}

#[tokio::test]
async fn test_missing_breadcrumb_element() {
    let source = StaticPages::new(&[("a/", "<html><head></head><body>no metadata</body></html>")]);
    let records = vec![record("a/", "A")];

    let report = run_checks(&source, &records).await;
    assert!(matches!(
        report.outcomes[0].result,
        Err(CheckFailure::ElementMissing)
    ));
}

#[tokio::test]
async fn test_empty_record_list_yields_empty_report() {
    let source = StaticPages::new(&[]);
    let report = run_checks(&source, &[]).await;
    assert!(report.is_ok());
    assert!(report.outcomes.is_empty());
}
