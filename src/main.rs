//! picbed CLI - move markdown pictures to a cloud picture bed
//!
//! Usage: picbed <COMMAND>
//!
//! Commands:
//!   migrate   Migrate the pictures of a document or folder
//!   locate    Print the picture URLs of a document
//!   upload    Upload a local file to the picture bed
//!   download  Download an object from the picture bed

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    picbed::infrastructure::init_logging(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Migrate {
            path,
            cache_dir,
            output_dir,
            ext,
        } => commands::migrate::cmd_migrate(&path, cache_dir, output_dir, ext, config, cli.json),
        Commands::Locate { path } => commands::locate::cmd_locate(&path, cli.json),
        Commands::Upload { file } => commands::upload::cmd_upload(&file, config, cli.json),
        Commands::Download { key, dest } => {
            commands::download::cmd_download(&key, &dest, config, cli.json)
        }
    }
}
