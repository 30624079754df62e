use serde::Deserialize;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Body of a `/rest/api/2/search` response.
///
/// Only `issues` is read; paging fields such as `total` and `startAt` are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
  pub issues: Vec<IssueRecord>,
}

/// A single issue in a search response. Only the key is consumed.
///
/// `key` is required and must be a string. One bad record rejects the whole
/// response, so a partial watch list is never logged.
#[derive(Debug, Deserialize)]
pub struct IssueRecord {
  pub key: String,
}
