use serde::Serialize;

use super::server::{ServerDetails, ToolDescriptor};

/// Divider line between rendered match blocks.
pub const BLOCK_DIVIDER: &str = "-------";

/// Fixed line emitted when a query failed at the transport level.
///
/// The wording (misspelling included) is part of the report contract
/// consumed by existing callers.
const CONNECTION_FAILED_LINE: &str = "Connection failed. Is the API key in environement?";

/// Outcome of a single query within a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// At least one registry entry matched the query.
    Matched {
        query: String,
        servers: Vec<ServerDetails>,
    },
    /// The registry answered but nothing matched.
    NoMatch { query: String },
    /// Transport-level failure (DNS, refused connection, timeout).
    ConnectionFailed { query: String },
    /// Any other failure (bad credential, malformed response, ...).
    Failed { query: String, message: String },
}

impl QueryOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, QueryOutcome::Matched { .. })
    }
}

/// Overall classification of a batch, derived from the outcomes rather
/// than from scraping the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Every query matched at least one server.
    Success,
    /// Some queries matched, some did not.
    Partial,
    /// No query produced a match (or the batch was empty).
    Failure,
}

/// Structured result of a batch of queries, in input order.
///
/// The legacy line-oriented report is a rendering of this structure; callers
/// that can consume [`SearchReport::status`] should prefer it over scraping
/// the text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
    pub outcomes: Vec<QueryOutcome>,
}

impl SearchReport {
    pub fn push(&mut self, outcome: QueryOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn status(&self) -> BatchStatus {
        if self.outcomes.is_empty() {
            return BatchStatus::Failure;
        }
        let matched = self.outcomes.iter().filter(|o| o.is_matched()).count();
        if matched == self.outcomes.len() {
            BatchStatus::Success
        } else if matched == 0 {
            BatchStatus::Failure
        } else {
            BatchStatus::Partial
        }
    }

    /// Render the legacy line-oriented text report.
    ///
    /// Matched entries whose `tools` field is null are omitted even though
    /// they matched by name. The result is trimmed of surrounding whitespace.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for outcome in &self.outcomes {
            match outcome {
                QueryOutcome::ConnectionFailed { .. } => {
                    output.push_str(CONNECTION_FAILED_LINE);
                    output.push('\n');
                }
                QueryOutcome::Failed { message, .. } => {
                    output.push_str(&format!("Error: {}\n", message));
                }
                QueryOutcome::NoMatch { query } => {
                    output.push_str(&format!(
                        "Error: No MCP server found for query '{}'\n",
                        query
                    ));
                }
                QueryOutcome::Matched { servers, .. } => {
                    for server in servers {
                        let Some(tools) = &server.tools else {
                            continue;
                        };
                        output.push_str(&format!("Name: {}\n", server.display_name));
                        output.push_str(&format!("Usage name: {}\n", server.qualified_name));
                        output.push_str(&format!("Tools: {}", render_tools(tools)));
                        output.push_str(&format!("\n{}\n", BLOCK_DIVIDER));
                    }
                }
            }
        }
        output.trim().to_string()
    }
}

fn render_tools(tools: &[ToolDescriptor]) -> String {
    let rendered: Vec<String> = tools
        .iter()
        .map(|tool| match &tool.description {
            Some(description) => format!("{}: {}", tool.name, description),
            None => tool.name.clone(),
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}
