// bmark/src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// A categorized bookmark organizer for the terminal
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print default configuration to stdout
    #[arg(long = "generate-config")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a bookmark
    Add {
        /// Bookmark name
        name: String,
        /// Bookmark URL; https:// is prepended when no scheme is given
        url: String,
        /// Category the bookmark belongs to
        category: Option<String>,
    },
    /// Add a category
    AddCategory {
        /// Category name (case-sensitive, must not exist yet)
        name: String,
    },
    /// Delete a bookmark
    Delete {
        /// Bookmark id as shown by `list`
        id: String,
    },
    /// Delete a category and all bookmarks in it
    DeleteCategory {
        /// Category name
        name: String,
    },
    /// Show bookmarks grouped by category
    List,
    /// List all categories, including empty ones
    Categories,
    /// Open a bookmark URL with the system handler
    Open {
        /// Bookmark id as shown by `list`
        id: String,
    },
    /// Toggle the display theme, or set it explicitly
    Theme {
        /// Target theme (light or dark); toggles when omitted
        theme: Option<String>,
    },
    /// Generate shell completion scripts (bash, zsh, fish)
    Completion {
        /// Shell to generate completions for
        shell: String,
    },
}
