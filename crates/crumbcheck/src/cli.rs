use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crumbcheck_scanner::{DEFAULT_BASE_URL, DEFAULT_ROOT, DEFAULT_STRIP_PREFIX};

#[derive(Parser)]
#[command(name = "crumbcheck")]
#[command(about = "Scan a markdown content tree and verify rendered breadcrumb metadata.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Discover content pages and print their fixture records.
    Scan {
        /// Content root directory to walk.
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: PathBuf,

        /// Literal prefix stripped from directory paths to form routes.
        #[arg(long, default_value = DEFAULT_STRIP_PREFIX)]
        strip_prefix: String,

        /// Site origin canonical URLs resolve against.
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Print records as JSON lines instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Scan, then run one breadcrumb check per page against the live site.
    Verify {
        /// Content root directory to walk.
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: PathBuf,

        /// Literal prefix stripped from directory paths to form routes.
        #[arg(long, default_value = DEFAULT_STRIP_PREFIX)]
        strip_prefix: String,

        /// Site origin the checks fetch from (point this at staging to
        /// verify a deployment before it goes live).
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}
