use anyhow::Result;
use tokio::io::{stdin, stdout, BufReader};

use crate::cli::Cli;
use crate::config::Config;
use crate::mcp::{McpServer, SERVER_NAME};
use crate::tools::FaviconTools;

pub async fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let tools = FaviconTools::new(config)?;
    let server = McpServer::new(tools);

    tracing::info!("{} listening on stdio", SERVER_NAME);
    server.serve(BufReader::new(stdin()), stdout()).await
}
