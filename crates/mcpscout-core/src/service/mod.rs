//! Domain services: the registry HTTP client and the finder tool built on it.

mod finder;
mod registry_client;

pub use finder::McpFinder;
pub use registry_client::{ApiKey, RegistryClient, DEFAULT_PAGE_SIZE, REGISTRY_BASE_URL};
