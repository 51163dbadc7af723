//! Error types for page access and breadcrumb checks.

use thiserror::Error;

/// Failure to retrieve a rendered page.
#[derive(Error, Debug)]
pub enum PageError {
    /// Route could not be joined onto the base URL.
    #[error("invalid route {route}: {source}")]
    Route {
        /// The offending route.
        route: String,
        /// URL parse error.
        #[source]
        source: url::ParseError,
    },

    /// Transport-level HTTP failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("{url} answered {status}")]
    Status {
        /// Fetched URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

/// One check's failure mode.
///
/// Each variant is reported for its own record only; a failure never stops
/// the remaining checks.
#[derive(Error, Debug)]
pub enum CheckFailure {
    /// The page itself could not be fetched.
    #[error("page fetch failed: {0}")]
    Fetch(#[from] PageError),

    /// No element carrying the breadcrumb payload in the rendered HTML.
    #[error("breadcrumb element not found in page")]
    ElementMissing,

    /// The element's text content is not valid JSON.
    #[error("breadcrumb payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    /// Fewer than two entries in the breadcrumb trail.
    #[error("breadcrumb trail has {0} entries, expected at least 2")]
    TrailTooShort(usize),

    /// Last breadcrumb entry does not name the page title.
    #[error("last breadcrumb is {actual:?}, expected {expected:?}")]
    TitleMismatch {
        /// Title from the page's frontmatter.
        expected: String,
        /// `name` of the last breadcrumb entry.
        actual: String,
    },
}
