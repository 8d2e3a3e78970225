//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Pager CLI: preview page windows and pagination markup
#[derive(Parser, Debug)]
#[command(name = "solidafy-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of bundle YAML files (overrides the config file)
    #[arg(short, long, global = true)]
    pub bundle_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Page position shared by the commands
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Total number of pages
    #[arg(long)]
    pub total_pages: u32,

    /// Current page (0-based)
    #[arg(short, long, default_value = "0")]
    pub page: u32,

    /// Maximum number of numbered links (0 = configured default)
    #[arg(short, long)]
    pub window: Option<u32>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the page window and boundary flags
    Window {
        #[command(flatten)]
        page: PageArgs,

        /// Total number of elements (defaults to one per page)
        #[arg(long)]
        total_elements: Option<u64>,
    },

    /// Render pagination markup
    Render {
        #[command(flatten)]
        page: PageArgs,

        /// Total number of elements (defaults to one per page)
        #[arg(long)]
        total_elements: Option<u64>,

        /// Locale for message lookup (e.g. es, de_AT)
        #[arg(short, long, default_value = "")]
        locale: String,

        /// Request URI used as the base for page links
        #[arg(short, long, default_value = "")]
        uri: String,

        /// Element the pagination is attached to
        #[arg(long, default_value = "ul")]
        element: String,

        /// Existing class attribute on the element
        #[arg(long)]
        class: Option<String>,

        /// Bundle override (like the sd:resource attribute)
        #[arg(long)]
        resource: Option<String>,
    },

    /// List available message bundles
    Bundles,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
