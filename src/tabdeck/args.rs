use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tabdeck")]
#[command(about = "Command-line editor for flip-card dashboard documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the dashboard document (overrides TABDECK_FILE)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

/// Card, bookmark and sub-bookmark positions are 1-based, matching what
/// `list` and `show` print.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cards and their bookmarks
    #[command(alias = "ls")]
    List,

    /// Show one card in full
    Show {
        /// Card position
        card: usize,
    },

    /// Validate the document and report issues
    Check,

    /// Create a starter document
    Init,

    /// Add a new card
    AddCard,

    /// Add a bookmark to a card
    AddBookmark {
        /// Card position
        card: usize,
    },

    /// Add a sub-bookmark under a bookmark
    AddSub {
        card: usize,
        bookmark: usize,
    },

    /// Delete a card
    RmCard {
        card: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete a bookmark
    RmBookmark {
        card: usize,
        bookmark: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete a sub-bookmark
    RmSub {
        card: usize,
        bookmark: usize,
        sub: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Duplicate a card below the original
    DupCard {
        card: usize,
    },

    /// Duplicate a bookmark below the original
    DupBookmark {
        card: usize,
        bookmark: usize,
    },

    /// Duplicate a sub-bookmark below the original
    DupSub {
        card: usize,
        bookmark: usize,
        sub: usize,
    },

    /// Move a bookmark up or down within its card
    MoveBookmark {
        card: usize,
        bookmark: usize,

        /// "up" or "down"
        direction: String,
    },

    /// Move a sub-bookmark up or down under its parent
    MoveSub {
        card: usize,
        bookmark: usize,
        sub: usize,

        /// "up" or "down"
        direction: String,
    },

    /// Set a card field (id, title, description, pattern, enabled, order)
    SetCard {
        card: usize,
        field: String,
        value: String,
    },

    /// Set a bookmark field (id, label, url, icon-type, icon)
    SetBookmark {
        card: usize,
        bookmark: usize,
        field: String,
        value: String,
    },

    /// Set a sub-bookmark field (id, label, url, icon-type, icon)
    SetSub {
        card: usize,
        bookmark: usize,
        sub: usize,
        field: String,
        value: String,
    },

    /// Add a tag to a bookmark
    TagAdd {
        card: usize,
        bookmark: usize,
        tag: String,

        /// Target a sub-bookmark of the given position instead
        #[arg(long)]
        sub: Option<usize>,
    },

    /// Remove a tag from a bookmark by position
    TagRm {
        card: usize,
        bookmark: usize,
        tag: usize,

        /// Target a sub-bookmark of the given position instead
        #[arg(long)]
        sub: Option<usize>,
    },

    /// Search cards, bookmarks, urls and tags
    Search {
        term: String,
    },

    /// Export the document (refused while validation errors remain)
    Export {
        /// Destination file; defaults to a timestamped name
        path: Option<PathBuf>,

        /// Copy to the clipboard instead of writing a file
        #[arg(long)]
        clipboard: bool,
    },

    /// Replace the document with the contents of a JSON file
    Import {
        path: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., icon-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
