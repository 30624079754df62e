//! # Jira Search Endpoint
//!
//! `GET /rest/api/2/search`, mapped onto the [`SearchError`] taxonomy.

use std::future::Future;

use reqwest::StatusCode;
use tracing::{debug, info, instrument, trace};

use crate::client::JiraClient;
use crate::error::SearchError;
use crate::models::SearchResponse;
use crate::search::{IssueSearch, SearchRequest};

impl JiraClient {
  /// Run an issue search.
  ///
  /// # Errors
  ///
  /// Returns [`SearchError::Transport`] if no response arrives,
  /// [`SearchError::Unauthorized`] on 401/403, [`SearchError::Status`] on any
  /// other non-success status, and [`SearchError::Malformed`] if the body
  /// does not hold an `issues` array.
  #[instrument(skip(self, request), fields(jql = request.jql()), level = "debug")]
  pub async fn search_issues(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
    info!("Searching Jira issues");
    trace!("Jira API URL: {}", request.url());

    let transport_error = |source| SearchError::Transport {
      url: request.url().to_string(),
      source,
    };

    let response = self.get(request.url().clone()).send().await.map_err(transport_error)?;

    let status = response.status();
    debug!("Jira API response status: {}", status);

    match status {
      status if status.is_success() => {
        let body = response.bytes().await.map_err(transport_error)?;
        let parsed = serde_json::from_slice::<SearchResponse>(&body).map_err(SearchError::Malformed)?;
        debug!("Search returned {} issues", parsed.issues.len());
        Ok(parsed)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        debug!("Authentication failed when searching Jira");
        Err(SearchError::Unauthorized)
      }
      _ => {
        let body = response.text().await.unwrap_or_default();
        debug!("Unexpected Jira API error: HTTP {} - {}", status, body);
        Err(SearchError::Status { status, body })
      }
    }
  }
}

impl IssueSearch for JiraClient {
  fn search(&self, request: &SearchRequest) -> impl Future<Output = Result<SearchResponse, SearchError>> + Send {
    self.search_issues(request)
  }
}
