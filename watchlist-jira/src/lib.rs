//! # Jira Watch List Client
//!
//! Queries the Jira REST search API for the issues watched by the current
//! user and logs each one as `Watching <key>`.
//!
//! The HTTP client and the output stream are both injected into
//! [`WatchInvoker`], so the search can be replaced by a test double and the
//! log captured in memory.

mod client;
pub mod consts;
pub mod creds;
mod endpoints;
pub mod error;
pub mod invoker;
pub mod models;
pub mod origin;
pub mod search;
pub mod sink;

// Re-export the client
pub use client::{ClientOptions, JiraClient};
pub use error::SearchError;
pub use invoker::{FailurePolicy, Invocation, WatchInvoker};
// Re-export models
pub use models::{IssueRecord, JiraAuth, SearchResponse};
pub use origin::{Origin, resolve_jira_origin};
pub use search::{IssueSearch, SearchRequest};
pub use sink::{MemoryLog, StreamLog, WatchLog, watch_line};
