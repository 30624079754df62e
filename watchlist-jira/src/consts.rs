//! Constants for the watchlist Jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("watchlist/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for Jira REST requests
pub const ACCEPT: &str = "application/json";

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Issue search endpoint, relative to the origin.
pub const SEARCH_PATH: &str = "rest/api/2/search";

/// Current user endpoint, used to test the connection.
pub const MYSELF_PATH: &str = "rest/api/2/myself";

/// Query parameter carrying the JQL filter.
pub const JQL_PARAM: &str = "jql";

/// JQL filter matching every issue the authenticated user watches.
pub const WATCHED_BY_CURRENT_USER: &str = "watcher = currentUser()";

/// Netrc machine consulted when the origin's own host has no entry.
pub const FALLBACK_NETRC_MACHINE: &str = "atlassian.net";
