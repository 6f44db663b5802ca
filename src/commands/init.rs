use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;

pub fn run(cli: &Cli) -> Result<()> {
    let config_path = &cli.config;

    if config_path.exists() {
        bail!(
            "{} already exists. Remove it first or use a different path with --config.",
            config_path.display()
        );
    }

    Config::default().save(config_path)?;

    println!("{} Created {}", "✓".green(), config_path.display());
    println!("Edit the [manifest] section to change the metadata written to manifest.json.");
    Ok(())
}
