//! Content Scanner - walks a markdown tree and builds fixture records.
//!
//! The walk is strictly sequential and depth-first; per-directory visitation
//! order is whatever the platform's listing returns, and each file is
//! visited exactly once. The scan is a pure producer: it returns a freshly
//! built `Vec` per call and mutates nothing.
//!
//! Routes identify pages by their containing directory, which is only sound
//! when each directory holds exactly one markdown file. That precondition is
//! validated during the walk and a violation aborts the scan.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use url::Url;
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::fixture::{FixtureRecord, ScanConfig};
use crate::frontmatter::{extract_frontmatter, parse_page_meta};

/// Content Scanner - discovers markdown pages and their frontmatter metadata.
///
/// # Usage
///
/// ```ignore
/// use crumbcheck_scanner::{ContentScanner, ScanConfig};
///
/// let config = ScanConfig::default().with_root("content/episode/");
/// let records = ContentScanner::new().scan(&config)?;
/// ```
#[derive(Debug)]
pub struct ContentScanner;

impl ContentScanner {
    /// Create a new scanner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Walk the configured content root and build one record per markdown
    /// file.
    ///
    /// # Errors
    ///
    /// The scan is all-or-nothing; see [`ScanError`] for the failure modes.
    /// Any unreadable directory or file, malformed or missing frontmatter
    /// block, missing title, or directory with more than one markdown file
    /// aborts the whole scan.
    pub fn scan(&self, config: &ScanConfig) -> Result<Vec<FixtureRecord>, ScanError> {
        if !config.root.is_dir() {
            return Err(ScanError::RootNotFound(config.root.clone()));
        }

        let base = parse_base_url(&config.base_url)?;

        let mut records = Vec::new();
        let mut seen_dirs: HashMap<PathBuf, PathBuf> = HashMap::new();

        for entry in WalkDir::new(&config.root).follow_links(false) {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map_or_else(|| config.root.clone(), Path::to_path_buf);
                ScanError::Io {
                    path,
                    source: err.into(),
                }
            })?;

            // Directories only drive recursion; extension match on files is
            // case-sensitive, so `.MD` is skipped.
            if !entry.file_type().is_file() || entry.path().extension() != Some("md".as_ref()) {
                continue;
            }

            let path = entry.path();
            let dir = path.parent().unwrap_or_else(|| Path::new(""));

            if let Some(first) = seen_dirs.get(dir) {
                return Err(ScanError::MultiplePages {
                    dir: dir.to_path_buf(),
                    first: first.clone(),
                    second: path.to_path_buf(),
                });
            }
            seen_dirs.insert(dir.to_path_buf(), path.to_path_buf());

            let record = self.scan_file(path, &base, config)?;
            log::debug!("discovered page {} from {}", record.route, path.display());
            records.push(record);
        }

        log::info!(
            "scanned {} pages under {}",
            records.len(),
            config.root.display()
        );

        Ok(records)
    }

    /// Build the fixture record for a single markdown file.
    ///
    /// # Errors
    ///
    /// Fails if the file is unreadable, has no leading frontmatter block,
    /// the block is not valid YAML, or it carries no `title` key.
    fn scan_file(
        &self,
        path: &Path,
        base: &Url,
        config: &ScanConfig,
    ) -> Result<FixtureRecord, ScanError> {
        let content = fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let block = extract_frontmatter(&content)
            .ok_or_else(|| ScanError::MissingFrontmatter(path.to_path_buf()))?;
        let meta = parse_page_meta(block).map_err(|source| ScanError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;

        let title = meta
            .title
            .ok_or_else(|| ScanError::MissingTitle(path.to_path_buf()))?;

        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let route = route_for_dir(dir, &config.strip_prefix);
        let canonical_url = base
            .join(&route)
            .map_err(|source| ScanError::BaseUrl {
                base: config.base_url.clone(),
                source,
            })?
            .to_string();

        Ok(FixtureRecord {
            route,
            source: path.to_path_buf(),
            canonical_url,
            title,
            description: meta.description,
        })
    }
}

impl Default for ContentScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Form a page route from a containing directory: strip the first occurrence
/// of the configured prefix and ensure a trailing `/`.
fn route_for_dir(dir: &Path, strip_prefix: &str) -> String {
    let dir = dir.to_string_lossy();
    let mut route = dir.replacen(strip_prefix, "", 1);
    if !route.is_empty() && !route.ends_with('/') {
        route.push('/');
    }
    route
}

fn parse_base_url(base: &str) -> Result<Url, ScanError> {
    Url::parse(base).map_err(|source| ScanError::BaseUrl {
        base: base.to_string(),
        source,
    })
}
