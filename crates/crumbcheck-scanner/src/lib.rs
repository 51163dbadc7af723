//! crumbcheck-scanner - Content discovery for breadcrumb verification.
//!
//! Walks a content tree of markdown files, parses each file's YAML
//! frontmatter, and builds one [`FixtureRecord`] per page. The records
//! parameterize the verification checks in the `crumbcheck` crate.
//!
//! # Architecture
//!
//! ```text
//! crumbcheck-scanner/src/
//! ├── lib.rs          # Re-exports (this file)
//! ├── error.rs        # ScanError enum
//! ├── frontmatter.rs  # YAML frontmatter extraction and key folding
//! ├── fixture.rs      # FixtureRecord, ScanConfig
//! └── scanner.rs      # ContentScanner
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use crumbcheck_scanner::{ContentScanner, ScanConfig};
//!
//! let config = ScanConfig::default();
//! let records = ContentScanner::new().scan(&config)?;
//! for record in &records {
//!     println!("{} -> {}", record.route, record.title);
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
pub mod frontmatter;
mod fixture;
mod scanner;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::ScanError;
pub use fixture::{
    DEFAULT_BASE_URL, DEFAULT_ROOT, DEFAULT_STRIP_PREFIX, FixtureRecord, ScanConfig,
};
pub use frontmatter::{PageMeta, extract_frontmatter, parse_page_meta};
pub use scanner::ContentScanner;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
