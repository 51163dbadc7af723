//! Error types for content scanning.
//!
//! Library crates use `thiserror` for explicit error enums. Every variant
//! names the file or directory it failed on so a broken scan is attributable
//! without a debugger.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for the content scan.
///
/// The scan is all-or-nothing: any variant aborts the whole run before a
/// single check is registered, so no partial fixture list ever escapes.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Content root does not exist or is not a directory.
    #[error("content root not found: {0}")]
    RootNotFound(PathBuf),

    /// Directory or file unreadable during the walk.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Markdown file has no leading frontmatter block.
    #[error("no frontmatter block at top of {0}")]
    MissingFrontmatter(PathBuf),

    /// Frontmatter block is not valid YAML.
    #[error("invalid frontmatter in {path}: {source}")]
    Frontmatter {
        /// File with the malformed block.
        path: PathBuf,
        /// YAML parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Frontmatter has no `title` key after case-folding.
    #[error("frontmatter of {0} has no title")]
    MissingTitle(PathBuf),

    /// More than one markdown file in a single directory. Routes identify
    /// pages by directory, so this precondition is validated up front.
    #[error("multiple markdown files in {dir}: {first} and {second}")]
    MultiplePages {
        /// Directory holding the conflicting files.
        dir: PathBuf,
        /// First markdown file seen in the directory.
        first: PathBuf,
        /// Second markdown file seen in the directory.
        second: PathBuf,
    },

    /// Configured base URL cannot be parsed or joined.
    #[error("invalid base url {base}: {source}")]
    BaseUrl {
        /// The offending base URL string.
        base: String,
        /// URL parse error.
        #[source]
        source: url::ParseError,
    },
}
