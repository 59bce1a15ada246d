//! The finder tool: batch query execution and report formatting.
//!
//! This is the surface a tool-calling agent framework drives: hand it
//! free-text query blocks, get back a line-oriented report of matching MCP
//! servers. The structured [`SearchReport`] carries the same information for
//! callers that prefer not to scrape text.

use tracing::warn;

use crate::domain::{QueryOutcome, SearchReport};
use crate::error::RegistryError;
use crate::service::registry_client::RegistryClient;

/// Tool that finds MCP servers and their tools in the registry.
pub struct McpFinder {
    client: RegistryClient,
}

impl McpFinder {
    pub fn new(client: RegistryClient) -> Self {
        Self { client }
    }

    /// Tag the orchestrating framework routes tool calls by.
    pub fn tag(&self) -> &'static str {
        "mcp_finder"
    }

    pub fn name(&self) -> &'static str {
        "MCP Finder"
    }

    pub fn description(&self) -> &'static str {
        "Find MCP servers and their tools"
    }

    /// Run a batch of queries, one registry search per query.
    ///
    /// A failing query never aborts the batch: transport failures become a
    /// `ConnectionFailed` outcome, anything else a `Failed` one, and the
    /// next query still runs.
    pub async fn run_queries(&self, queries: &[String]) -> SearchReport {
        let mut report = SearchReport::default();
        for query in queries {
            let needle = normalize_query(query);
            match self.client.find_servers(&needle).await {
                Ok(servers) if servers.is_empty() => {
                    report.push(QueryOutcome::NoMatch {
                        query: query.clone(),
                    });
                }
                Ok(servers) => {
                    report.push(QueryOutcome::Matched {
                        query: query.clone(),
                        servers,
                    });
                }
                Err(err) if err.is_network() => {
                    warn!("Query '{}' failed at transport level: {}", needle, err);
                    report.push(QueryOutcome::ConnectionFailed {
                        query: query.clone(),
                    });
                }
                Err(err) => {
                    warn!("Query '{}' failed: {}", needle, err);
                    report.push(QueryOutcome::Failed {
                        query: query.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }
        report
    }

    /// Legacy text entry point: render the batch as the line-oriented
    /// report.
    ///
    /// `_safety` is accepted for interface compatibility with the tool
    /// framework and has no effect.
    pub async fn execute(&self, queries: &[String], _safety: bool) -> String {
        if queries.is_empty() {
            return "Error: No blocks provided".to_string();
        }
        self.run_queries(queries).await.render()
    }

    /// Legacy heuristic classifier over the rendered report.
    ///
    /// Substring-based, so a tool description containing "error" trips it;
    /// prefer [`SearchReport::status`] where the structured report is at
    /// hand.
    pub fn execution_failure_check(report: &str) -> bool {
        let report = report.trim().to_lowercase();
        report.is_empty() || report.contains("error") || report.contains("not found")
    }

    /// Wrap a rendered report in the fixed feedback template.
    pub fn interpreter_feedback(report: &str) -> Result<String, RegistryError> {
        if report.is_empty() {
            return Err(RegistryError::InvalidInput(
                "no output to interpret".to_string(),
            ));
        }
        Ok(format!("The following MCPs were found:\n{report}\n"))
    }
}

/// Queries arrive as free-text blocks; match on the trimmed, lowercased
/// text with internal newlines stripped.
fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase().replace('\n', "")
}
