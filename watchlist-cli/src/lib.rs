//! # watchlist
//!
//! Command-line host for the watch list invoker: resolves the Jira origin,
//! credentials and transport options, runs the search once and reports the
//! outcome through the exit status.

pub mod cli;
pub mod config;
pub mod output;
