mod report;
mod server;

pub use report::{BatchStatus, QueryOutcome, SearchReport, BLOCK_DIVIDER};
pub use server::{Pagination, ServerDetails, ServerList, ServerSummary, ToolDescriptor};
