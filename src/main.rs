use anyhow::Result;
use clap::Parser;
use favicon_mcp::cli::{Cli, Commands};
use favicon_mcp::commands;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        None | Some(Commands::Serve) => commands::serve::run(&cli).await,
        Some(Commands::Init) => commands::init::run(&cli),
        Some(Commands::FromPng { image, output }) => {
            commands::generate::from_png(&cli, image, output).await
        }
        Some(Commands::FromUrl { url, output }) => {
            commands::generate::from_url(&cli, url, output).await
        }
    }
}

/// Stdout belongs to the tool protocol, so logs always go to stderr.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
