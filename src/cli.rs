use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// picbed - move the pictures of markdown documents to a cloud picture bed
#[derive(Parser, Debug)]
#[command(name = "picbed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: picbed.private.toml, then picbed.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Migrate the pictures of a markdown file, or of every document in a folder
    Migrate {
        /// Markdown file or folder
        path: PathBuf,

        /// Folder for downloaded pictures (created if missing)
        #[arg(long, value_name = "DIR")]
        cache_dir: Option<PathBuf>,

        /// Folder for rewritten documents (must exist)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Document extension picked up when PATH is a folder
        #[arg(long, value_name = "EXT")]
        ext: Option<String>,
    },

    /// Print the picture URLs referenced by a markdown file
    Locate {
        /// Markdown file
        path: PathBuf,
    },

    /// Upload a local file to the picture bed and print its URL
    Upload {
        /// Local file
        file: PathBuf,
    },

    /// Download an object from the picture bed
    Download {
        /// Remote key, including the prefix
        key: String,

        /// Local destination file
        dest: PathBuf,
    },
}
