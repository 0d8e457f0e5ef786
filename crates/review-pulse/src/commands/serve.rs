//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use review_pulse_core::config::Config;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{info, instrument};

use super::{DatasetArgs, load_dataset};
use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Load the dataset once and serve MCP requests until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    args: ServeArgs,
    max_input: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let dataset = load_dataset(&args.dataset, &config, max_input)?;
    info!(
        stores = dataset.stores.len(),
        reviews = dataset.reviews.len(),
        "starting MCP server on stdio"
    );

    let service = ProjectServer::new(dataset)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;

    info!("MCP server stopped");
    Ok(())
}
