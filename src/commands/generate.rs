use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::tools::{is_error, FaviconTools};

pub async fn from_png(cli: &Cli, image: &Path, output: &Path) -> Result<()> {
    let tools = FaviconTools::new(Config::load(&cli.config)?)?;
    let message = tools
        .generate_favicon_from_png(utf8(image)?, utf8(output)?)
        .await;
    report(&message)
}

pub async fn from_url(cli: &Cli, url: &str, output: &Path) -> Result<()> {
    let tools = FaviconTools::new(Config::load(&cli.config)?)?;
    let message = tools
        .generate_favicon_from_url(url, utf8(output)?)
        .await;
    report(&message)
}

/// The tools take string paths; refuse anything that would not survive the trip.
fn utf8(path: &Path) -> Result<&str> {
    match path.to_str() {
        Some(s) => Ok(s),
        None => bail!("Path is not valid UTF-8: {}", path.display()),
    }
}

fn report(message: &str) -> Result<()> {
    if is_error(message) {
        bail!("{}", message);
    }
    println!("{} {}", "✓".green(), message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_paths_pass_through() {
        assert_eq!(utf8(Path::new("icons/out")).unwrap(), "icons/out");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"icons/\xff"));
        let err = utf8(path).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");
    }
}
