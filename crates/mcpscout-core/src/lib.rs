//! # McpScout Core Library
//!
//! Domain types and services for searching the Smithery MCP registry.
//!
//! ## Modules
//!
//! - `domain` - Registry entities (ServerSummary, ServerDetails) and report types
//! - `error` - Error taxonomy for registry operations
//! - `service` - Registry API client and the finder tool built on it

pub mod domain;
pub mod error;
pub mod service;

// Re-export commonly used types
pub use domain::*;
pub use error::RegistryError;
pub use service::{ApiKey, McpFinder, RegistryClient, DEFAULT_PAGE_SIZE, REGISTRY_BASE_URL};
