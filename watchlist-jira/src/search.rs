//! The watch list search request and the capability that executes it.

use std::future::Future;

use url::Url;

use crate::consts::{JQL_PARAM, SEARCH_PATH, WATCHED_BY_CURRENT_USER};
use crate::error::SearchError;
use crate::models::SearchResponse;
use crate::origin::Origin;

/// An issue search against `<origin>/rest/api/2/search`.
///
/// Built fresh for each invocation and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
  url: Url,
  jql: String,
}

impl SearchRequest {
  /// Search for every issue the authenticated user is watching.
  pub fn watched_by_current_user(origin: &Origin) -> Result<Self, url::ParseError> {
    let mut url = origin.endpoint(SEARCH_PATH)?;
    url.query_pairs_mut().append_pair(JQL_PARAM, WATCHED_BY_CURRENT_USER);

    Ok(Self {
      url,
      jql: WATCHED_BY_CURRENT_USER.to_string(),
    })
  }

  /// Fully encoded request URL, query string included.
  pub fn url(&self) -> &Url {
    &self.url
  }

  /// Decoded JQL filter carried in the query string.
  pub fn jql(&self) -> &str {
    &self.jql
  }
}

/// Something that can run a [`SearchRequest`].
///
/// [`crate::JiraClient`] is the HTTP implementation; tests swap in doubles.
pub trait IssueSearch {
  fn search(&self, request: &SearchRequest) -> impl Future<Output = Result<SearchResponse, SearchError>> + Send;
}
