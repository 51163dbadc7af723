//! Breadcrumb structured data - model, extraction, and the check itself.
//!
//! Pages embed a schema.org `BreadcrumbList` as JSON in an element with the
//! well-known id `meta-breadcrumbs`, typically:
//!
//! ```html
//! <script type="application/ld+json" id="meta-breadcrumbs">
//! { "@type": "BreadcrumbList", "itemListElement": [ ... ] }
//! </script>
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::CheckFailure;

/// Well-known id of the element carrying the breadcrumb payload.
pub const BREADCRUMB_ELEMENT_ID: &str = "meta-breadcrumbs";

/// Regex matching the breadcrumb element and capturing its text content.
static BREADCRUMB_ELEMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(?is)<script[^>]*\bid\s*=\s*["']{BREADCRUMB_ELEMENT_ID}["'][^>]*>(.*?)</script>"#
    ))
    .unwrap_or_else(|err| panic!("invalid BREADCRUMB_ELEMENT_REGEX: {err}"))
});

/// Schema.org `BreadcrumbList`: the ordered navigation trail to a page.
#[derive(Debug, Clone, Deserialize)]
pub struct BreadcrumbList {
    /// Trail entries, ordered from site root to the page itself.
    #[serde(rename = "itemListElement", default)]
    pub item_list_element: Vec<BreadcrumbItem>,
}

/// One entry in the breadcrumb trail.
#[derive(Debug, Clone, Deserialize)]
pub struct BreadcrumbItem {
    /// Display name of the entry.
    #[serde(default)]
    pub name: String,
    /// Position in the trail (1-based in schema.org, unchecked here).
    #[serde(default)]
    pub position: Option<u32>,
}

/// Pull the breadcrumb payload out of rendered HTML and parse it.
///
/// # Errors
///
/// [`CheckFailure::ElementMissing`] if no `meta-breadcrumbs` element exists,
/// [`CheckFailure::Payload`] if its text content is not valid JSON.
pub fn extract_breadcrumbs(html: &str) -> Result<BreadcrumbList, CheckFailure> {
    let captures = BREADCRUMB_ELEMENT_REGEX
        .captures(html)
        .ok_or(CheckFailure::ElementMissing)?;
    let payload = captures.get(1).map_or("", |m| m.as_str());
    Ok(serde_json::from_str(payload)?)
}

/// The active check: the trail has at least two entries and its last entry
/// names the page title, exactly (case- and whitespace-sensitive).
///
/// # Errors
///
/// Any [`CheckFailure`] variant except `Fetch`.
pub fn check_breadcrumbs(html: &str, expected_title: &str) -> Result<(), CheckFailure> {
    let trail = extract_breadcrumbs(html)?;
    let entries = &trail.item_list_element;

    if entries.len() < 2 {
        return Err(CheckFailure::TrailTooShort(entries.len()));
    }

    // len() >= 2, so last() exists.
    let last = entries
        .last()
        .ok_or(CheckFailure::TrailTooShort(0))?;
    if last.name != expected_title {
        return Err(CheckFailure::TitleMismatch {
            expected: expected_title.to_string(),
            actual: last.name.clone(),
        });
    }

    Ok(())
}
