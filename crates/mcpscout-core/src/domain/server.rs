use serde::{Deserialize, Serialize};

/// A callable tool advertised by an MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,

    pub description: Option<String>,
}

/// One registry entry as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSummary {
    /// Unique identifier (e.g. "@smithery-ai/github")
    pub qualified_name: String,

    /// Human-readable name
    #[serde(default)]
    pub display_name: String,

    /// Optional description
    pub description: Option<String>,
}

impl ServerSummary {
    /// Case-insensitive substring match against the qualified name.
    pub fn matches(&self, needle: &str) -> bool {
        self.qualified_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// Full record from the detail endpoint, keyed by qualified name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDetails {
    /// Unique identifier, same key the summary carried
    pub qualified_name: String,

    /// Human-readable name
    #[serde(default)]
    pub display_name: String,

    /// Optional description
    pub description: Option<String>,

    /// Nullable on the wire: null means the registry has not indexed
    /// this server's tools yet.
    pub tools: Option<Vec<ToolDescriptor>>,
}

/// Response from `GET /servers`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerList {
    #[serde(default)]
    pub servers: Vec<ServerSummary>,

    /// Echoed paging info; decoded but never followed (single-page strategy).
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_count: u64,
}
