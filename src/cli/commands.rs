use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Backend;

#[derive(Parser, Debug)]
#[command(name = "pocketnote")]
#[command(version, about = "A small local note keeper")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project directory (default: nearest parent containing .pocketnote/)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a notes project in the current directory
    Init {
        /// Storage backend (file, sqlite)
        #[arg(long, default_value = "file")]
        backend: Backend,
    },

    /// Add a new note
    Add {
        /// Note title
        title: Option<String>,

        /// Note content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find notes whose title or content contains QUERY (case-insensitive)
    Search {
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        /// Note ID or unique prefix
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a note's title and/or content
    Edit {
        /// Note ID or unique prefix
        id: String,

        /// New title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read new content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID or unique prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Interactive session: search, add, edit, and delete notes
    Shell,
}
