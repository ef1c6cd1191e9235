//! CLI argument parsing for xrefstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xs")]
#[command(author, version, about = "Cross-reference index of named texts", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive shell, importing any files given first
    Repl {
        /// Text files to import before the first prompt
        files: Vec<PathBuf>,
    },

    /// Check that a file can be imported
    Check {
        /// File to check
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Import a file and write its index without entering the shell
    Export {
        /// Text file to index
        #[arg(required = true)]
        file: PathBuf,

        /// Output file for the index
        #[arg(required = true)]
        output: PathBuf,
    },
}
