//! Fixture types - the scanner's output model and its configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default content root to scan.
pub const DEFAULT_ROOT: &str = "content/episode/";

/// Default literal prefix stripped from directory paths to form routes.
pub const DEFAULT_STRIP_PREFIX: &str = "content/";

/// Default site origin for canonical URLs.
pub const DEFAULT_BASE_URL: &str = "https://www.cloudwithchris.com";

/// Configuration for a content scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScanConfig {
    /// Content root directory to walk.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Literal prefix removed from each directory path when forming routes.
    #[serde(default = "default_strip_prefix")]
    pub strip_prefix: String,
    /// Site origin that routes resolve against for canonical URLs.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_strip_prefix() -> String {
    DEFAULT_STRIP_PREFIX.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            strip_prefix: default_strip_prefix(),
            base_url: default_base_url(),
        }
    }
}

impl ScanConfig {
    /// Create a config with the default root, prefix, and origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the stripped route prefix.
    #[must_use]
    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = prefix.into();
        self
    }

    /// Set the site origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// One discovered content page.
///
/// Built once during the scan, never mutated afterwards. Exactly one record
/// exists per markdown file under the content root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
    /// Directory-derived page route relative to the content root, with the
    /// configured prefix stripped and a trailing `/` (e.g. `episode/42/`).
    pub route: String,
    /// Full path of the markdown file this record was built from.
    pub source: PathBuf,
    /// `route` resolved against the configured site origin.
    pub canonical_url: String,
    /// Page title from frontmatter; the value the breadcrumb check compares.
    pub title: String,
    /// Page description from frontmatter; carried but unused by the active
    /// check.
    #[serde(default)]
    pub description: Option<String>,
}

impl FixtureRecord {
    /// Directory the record identifies, i.e. the parent of `source`.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.source.parent()
    }
}
