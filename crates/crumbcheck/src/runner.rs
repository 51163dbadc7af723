//! Check runner - binds one breadcrumb check to every fixture record.
//!
//! Checks are independent: each one fetches its own page and reads only its
//! own record, so a failure is captured in the report and never stops the
//! remaining checks. Execution here is sequential; nothing in the checks
//! themselves would prevent a parallel driver, since no state is shared.

use crumbcheck_scanner::FixtureRecord;

use crate::breadcrumb::check_breadcrumbs;
use crate::error::CheckFailure;
use crate::page::PageSource;
use crate::report::{CheckOutcome, Report};

/// Run the breadcrumb check for every record against `source`.
pub async fn run_checks(source: &dyn PageSource, records: &[FixtureRecord]) -> Report {
    let mut report = Report::default();

    for record in records {
        let result = run_one(source, record).await;
        match &result {
            Ok(()) => tracing::info!(route = %record.route, "breadcrumbs ok"),
            Err(failure) => {
                tracing::warn!(route = %record.route, %failure, "breadcrumb check failed");
            }
        }
        report.outcomes.push(CheckOutcome {
            route: record.route.clone(),
            title: record.title.clone(),
            result,
        });
    }

    report
}

async fn run_one(source: &dyn PageSource, record: &FixtureRecord) -> Result<(), CheckFailure> {
    let html = source.fetch(&record.route).await?;
    check_breadcrumbs(&html, &record.title)
}
