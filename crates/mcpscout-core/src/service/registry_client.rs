//! HTTP client for the Smithery MCP registry API.
//!
//! Two endpoints are used: the paged server list and the per-entry detail
//! lookup. Searching is done client-side by substring match against the
//! qualified name; one oversized page (`DEFAULT_PAGE_SIZE`) stands in for
//! real pagination, so entries beyond it are never seen.

use std::fmt;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::{ServerDetails, ServerList};
use crate::error::RegistryError;

/// Production registry endpoint.
pub const REGISTRY_BASE_URL: &str = "https://registry.smithery.ai";

/// Page size for the single list call.
pub const DEFAULT_PAGE_SIZE: u32 = 5000;

/// Bearer token for the registry API.
///
/// Wrapped so the secret does not leak through Debug output or logs.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Client for the Smithery registry API.
///
/// All fields are read-only after construction, so one instance can be
/// shared across sequential searches.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: String,
    api_key: Option<ApiKey>,
    client: reqwest::Client,
}

impl RegistryClient {
    /// Create a new registry client.
    ///
    /// A missing key is accepted here; the registry rejects the first
    /// unauthenticated request instead, and that failure surfaces through
    /// the normal error path.
    pub fn new(api_key: Option<ApiKey>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("McpScout/0.1")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: REGISTRY_BASE_URL.to_string(),
            api_key,
            client,
        }
    }

    /// Point the client at a different registry (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and decode the JSON body.
    ///
    /// Failure classification: transport errors map to `Network`, non-2xx
    /// statuses to `Http`, undecodable bodies to `Decode`.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&[(&str, String)]>,
        body: Option<&serde_json::Value>,
    ) -> Result<T, RegistryError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), endpoint);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose());
        }
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(RegistryError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RegistryError::Http { status, message });
        }

        response.json().await.map_err(RegistryError::Decode)
    }

    /// Fetch one page of the server list from `/servers`.
    ///
    /// No automatic pagination: a registry with more entries than
    /// `page_size` is silently truncated to the requested page.
    pub async fn list_servers(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<ServerList, RegistryError> {
        let params = [("page", page.to_string()), ("pageSize", page_size.to_string())];
        let list: ServerList = self
            .request(Method::GET, "/servers", Some(&params), None)
            .await?;

        info!(
            "Listed {} servers (page {}, pageSize {})",
            list.servers.len(),
            page,
            page_size
        );
        Ok(list)
    }

    /// Fetch the full record for one entry from `/servers/<qualifiedName>`.
    pub async fn get_server_details(
        &self,
        qualified_name: &str,
    ) -> Result<ServerDetails, RegistryError> {
        // Qualified names may contain '/', which is part of the path on
        // this API, so no percent-encoding here.
        let endpoint = format!("/servers/{}", qualified_name);
        self.request(Method::GET, &endpoint, None, None).await
    }

    /// Search the registry by case-insensitive substring on the
    /// qualified name.
    ///
    /// One list call, then one sequential detail fetch per match, in
    /// registry order. Failures propagate to the caller unmodified.
    pub async fn find_servers(&self, query: &str) -> Result<Vec<ServerDetails>, RegistryError> {
        let list = self.list_servers(1, DEFAULT_PAGE_SIZE).await?;

        let mut matches = Vec::new();
        for summary in &list.servers {
            if summary.matches(query) {
                let details = self.get_server_details(&summary.qualified_name).await?;
                matches.push(details);
            }
        }

        info!(
            "Query '{}' matched {} of {} servers",
            query,
            matches.len(),
            list.servers.len()
        );
        Ok(matches)
    }
}
