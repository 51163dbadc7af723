//! Check results - per-record outcomes and their aggregation.

use serde_json::json;

use crate::error::CheckFailure;

/// Result of one breadcrumb check, bound to one fixture record.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Route the check ran against; names the check in reports.
    pub route: String,
    /// Title the breadcrumb trail was compared to.
    pub title: String,
    /// Pass, or the specific failure.
    pub result: Result<(), CheckFailure>,
}

impl CheckOutcome {
    /// Whether the check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Results from a verification run, in execution order.
#[derive(Debug, Default)]
pub struct Report {
    /// One outcome per fixture record.
    pub outcomes: Vec<CheckOutcome>,
}

impl Report {
    /// Whether every check passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Number of passed checks.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// JSON rendering for machine consumption.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "passed": self.passed(),
            "failed": self.failed(),
            "checks": self.outcomes.iter().map(|o| {
                json!({
                    "route": o.route,
                    "title": o.title,
                    "status": if o.passed() { "pass" } else { "fail" },
                    "failure": o.result.as_ref().err().map(ToString::to_string),
                })
            }).collect::<Vec<_>>(),
        })
    }
}
