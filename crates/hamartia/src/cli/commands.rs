//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use hamartia::StoreBackend;
use std::path::PathBuf;

/// Hamartia - Aristotelian character analysis with large language models
#[derive(Parser, Debug)]
#[command(name = "hamartia")]
#[command(about = "Aristotelian character analysis with large language models", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(long, global = true, env = "HAMARTIA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Record store backend (memory, filesystem); defaults to the configured one
    #[arg(long, global = true)]
    pub store: Option<StoreBackend>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single character
    Analyze {
        /// Character name, optionally with its source ("Hamlet from Hamlet")
        name: String,

        /// Save the record to the store
        #[arg(long)]
        save: bool,
    },

    /// Analyze many characters in sequence
    Batch(BatchArgs),

    /// Ask the model for characters matching a theme
    Suggest {
        /// Theme, e.g. "Greek tragedy"
        theme: String,

        /// Number of names to request
        #[arg(long, default_value_t = 5)]
        count: usize,
    },

    /// Show a stored record
    Get {
        /// Character name
        name: String,
    },

    /// List every stored record
    List,

    /// Find stored records whose field equals a value
    Find {
        /// Field name (e.g. flawTag, wisdomLevel, categoryTags)
        field: String,

        /// Value to match; tag membership for categoryTags
        value: String,
    },

    /// Change one field of a stored record
    Update {
        /// Character name
        name: String,

        /// Field name
        #[arg(long)]
        field: String,

        /// New value; comma-separated for categoryTags
        #[arg(long)]
        value: String,
    },

    /// Delete a stored record
    Delete {
        /// Character name
        name: String,
    },
}

/// Where batch names come from. Without a source the literature list is used.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Bundled list: literature, movies, series or artists
    #[arg(long, conflicts_with_all = ["file", "theme"])]
    pub list: Option<String>,

    /// File with one name per line
    #[arg(long, conflicts_with = "theme")]
    pub file: Option<PathBuf>,

    /// Ask the model for names matching this theme
    #[arg(long)]
    pub theme: Option<String>,

    /// Number of names to request with --theme
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Analyze at most this many names
    #[arg(long)]
    pub limit: Option<usize>,

    /// Pause between items in milliseconds, overriding the configuration
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Save every record to the store
    #[arg(long)]
    pub save: bool,
}
