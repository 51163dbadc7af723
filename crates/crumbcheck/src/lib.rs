//! crumbcheck - Breadcrumb verification for rendered sites.
//!
//! Consumes the fixture records produced by `crumbcheck-scanner` and runs
//! one independent check per record against the live rendering of that
//! page: the schema.org `BreadcrumbList` embedded in the page must have at
//! least two entries and its last entry's `name` must equal the page title
//! from frontmatter, exactly.
//!
//! # Architecture
//!
//! ```text
//! crumbcheck/src/
//! ├── lib.rs         # Re-exports (this file)
//! ├── error.rs       # CheckFailure, PageError
//! ├── page.rs        # PageSource trait + HTTP implementation
//! ├── breadcrumb.rs  # BreadcrumbList model and HTML extraction
//! ├── runner.rs      # One check per fixture record
//! ├── report.rs      # Report / CheckOutcome aggregation
//! ├── cli.rs         # clap definitions
//! └── main.rs        # crumbcheck binary
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod breadcrumb;
mod error;
mod page;
mod report;
mod runner;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use breadcrumb::{
    BREADCRUMB_ELEMENT_ID, BreadcrumbItem, BreadcrumbList, check_breadcrumbs, extract_breadcrumbs,
};
pub use error::{CheckFailure, PageError};
pub use page::{HttpPageSource, PageSource};
pub use report::{CheckOutcome, Report};
pub use runner::run_checks;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
