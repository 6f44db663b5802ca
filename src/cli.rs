use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "favicon-mcp",
    version,
    about = "Generate complete favicon sets from an image file or URL"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(long, global = true, default_value = crate::config::CONFIG_NAME)]
    pub config: PathBuf,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the favicon tools over stdio (default)
    Serve,

    /// Write a config file with the default manifest metadata
    Init,

    /// Generate a favicon set from a local image file
    FromPng {
        /// Source image
        image: PathBuf,
        /// Output directory
        output: PathBuf,
    },

    /// Download an image and generate a favicon set from it
    FromUrl {
        /// Source image URL
        url: String,
        /// Output directory
        output: PathBuf,
    },
}
