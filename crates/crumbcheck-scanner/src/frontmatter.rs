//! YAML frontmatter extraction and key normalization.
//!
//! A frontmatter block is bounded by `---` lines and must open on the very
//! first line of the file:
//!
//! ```yaml
//! ---
//! Title: "Episode 42"
//! description: "A page about the answer"
//! ---
//! ```
//!
//! Top-level keys are case-folded to lowercase before lookup, so `Title`,
//! `TITLE`, and `title` are equivalent sources for the title field.

use serde::{Deserialize, Serialize};

/// Page metadata pulled out of a frontmatter mapping.
///
/// Only the fields the verification checks care about; everything else in
/// the mapping is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page title, from the `title` key (any casing).
    #[serde(default)]
    pub title: Option<String>,
    /// Page description, from the `description` key (any casing).
    #[serde(default)]
    pub description: Option<String>,
}

/// Extract the YAML frontmatter block from markdown content.
///
/// Returns the text between the opening `---` line (which must be the first
/// line of `content`) and the next `---` line, or `None` if either delimiter
/// is missing.
#[must_use]
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse a frontmatter block into [`PageMeta`], case-folding top-level keys.
///
/// Values that are not YAML strings are treated as absent. When duplicate
/// keys collapse under folding (`Title` and `TITLE`), the last one wins.
///
/// # Errors
///
/// Returns the underlying error if the block is not valid YAML.
pub fn parse_page_meta(yaml: &str) -> Result<PageMeta, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    let mut meta = PageMeta::default();

    let serde_yaml::Value::Mapping(mapping) = value else {
        return Ok(meta);
    };

    for (key, val) in &mapping {
        let Some(key) = key.as_str() else { continue };
        match key.to_lowercase().as_str() {
            "title" => meta.title = val.as_str().map(str::to_string),
            "description" => meta.description = val.as_str().map(str::to_string),
            _ => {}
        }
    }

    Ok(meta)
}
