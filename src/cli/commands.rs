//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pedia")]
#[command(about = "Wiki-style encyclopedia over markdown files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new wiki
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List all entry titles
    List,

    /// Show an entry rendered as HTML
    View {
        /// Entry title (exact, including case)
        title: String,
    },

    /// Search entry titles, case-insensitively
    Search {
        /// Query; an exact title match shows that entry
        query: String,
    },

    /// Create a new entry
    New {
        /// Title of the new entry (unique, ignoring case)
        title: String,

        /// Markdown content
        content: String,
    },

    /// Overwrite an entry's content, or show the stored content when none is given
    Edit {
        /// Entry title
        title: String,

        /// New markdown content; omit to print the current content instead
        content: Option<String>,
    },

    /// Show a randomly chosen entry
    Random,
}
