//! # Watch List Invoker
//!
//! Runs the watched-issues search once and logs `Watching <key>` for every
//! issue in the response, in the order received.
//!
//! What happens on failure is a [`FailurePolicy`] choice. The default,
//! [`FailurePolicy::Silent`], produces no output at all, so an unreachable
//! server looks exactly like a missing result. [`FailurePolicy::Report`]
//! hands the [`SearchError`] back to the caller instead.

use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::models::SearchResponse;
use crate::origin::Origin;
use crate::search::{IssueSearch, SearchRequest};
use crate::sink::WatchLog;

/// What to do when the search fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
  /// Swallow the failure; nothing is logged.
  #[default]
  Silent,
  /// Return the failure to the caller.
  Report,
}

/// Result of an invocation that did not return an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
  /// The search succeeded and `count` lines were logged.
  Logged { count: usize },
  /// The search failed and [`FailurePolicy::Silent`] discarded the error.
  FailureSuppressed,
}

/// Issues the watched-issues search through an injected [`IssueSearch`] and
/// writes the results to an injected [`WatchLog`].
pub struct WatchInvoker<S, L> {
  search: S,
  log: L,
  origin: Origin,
  policy: FailurePolicy,
}

impl<S, L> WatchInvoker<S, L>
where
  S: IssueSearch,
  L: WatchLog,
{
  pub fn new(search: S, log: L, origin: Origin) -> Self {
    Self {
      search,
      log,
      origin,
      policy: FailurePolicy::default(),
    }
  }

  pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
    self.policy = policy;
    self
  }

  pub fn policy(&self) -> FailurePolicy {
    self.policy
  }

  /// The request this invoker sends.
  pub fn request(&self) -> Result<SearchRequest, SearchError> {
    Ok(SearchRequest::watched_by_current_user(&self.origin)?)
  }

  /// Send the search and log every returned issue.
  ///
  /// # Errors
  ///
  /// Only under [`FailurePolicy::Report`]; with the default policy a failed
  /// search resolves to [`Invocation::FailureSuppressed`].
  pub async fn invoke(&self) -> Result<Invocation, SearchError> {
    match self.fetch().await {
      Ok(response) => {
        for issue in &response.issues {
          self.log.watching(&issue.key);
        }
        debug!("Logged {} watched issues", response.issues.len());
        Ok(Invocation::Logged {
          count: response.issues.len(),
        })
      }
      Err(error) => match self.policy {
        FailurePolicy::Silent => {
          trace!("Watch list search failed, suppressing: {}", error);
          Ok(Invocation::FailureSuppressed)
        }
        FailurePolicy::Report => Err(error),
      },
    }
  }

  async fn fetch(&self) -> Result<SearchResponse, SearchError> {
    let request = self.request()?;
    self.search.search(&request).await
  }
}

impl<S, L> WatchInvoker<S, L>
where
  S: IssueSearch + Send + Sync + 'static,
  L: WatchLog + 'static,
{
  /// Start the invocation on the current tokio runtime and return at once.
  ///
  /// The returned handle resolves to the same value as [`Self::invoke`].
  /// Dropping it does not cancel the search.
  ///
  /// # Panics
  ///
  /// Panics if called outside a tokio runtime.
  pub fn dispatch(self) -> JoinHandle<Result<Invocation, SearchError>> {
    tokio::spawn(async move { self.invoke().await })
  }
}
