//! Standalone runner: search the Smithery registry from the command line.
//!
//! Usage: `mcpscout <query> [<query>...]`
//!
//! The bearer token is read from the `MCP_FINDER` environment variable (a
//! `.env` file is honored). Without it the registry rejects the first
//! request and the report carries the error line instead of results.

use anyhow::Result;
use mcpscout_core::{ApiKey, BatchStatus, McpFinder, RegistryClient};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const API_KEY_ENV: &str = "MCP_FINDER";

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let queries: Vec<String> = std::env::args().skip(1).collect();
    if queries.is_empty() {
        anyhow::bail!("usage: mcpscout <query> [<query>...]");
    }

    let api_key = std::env::var(API_KEY_ENV).ok().map(ApiKey::new);
    if api_key.is_none() {
        warn!(
            "{} is not set; registry requests will be unauthenticated",
            API_KEY_ENV
        );
    }

    let finder = McpFinder::new(RegistryClient::new(api_key));
    let report = finder.run_queries(&queries).await;
    println!("{}", report.render());

    if report.status() == BatchStatus::Failure {
        std::process::exit(1);
    }
    Ok(())
}
