//! # Jira API Endpoints
//!
//! Endpoint implementations for the Jira REST resources the watch list uses.

pub mod search;
