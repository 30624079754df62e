use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Proxy, RequestBuilder, header};
use tracing::{debug, instrument};
use url::Url;

use crate::consts::{ACCEPT, MYSELF_PATH, USER_AGENT};
use crate::models::JiraAuth;
use crate::origin::Origin;

/// Transport settings for the underlying HTTP client.
///
/// Both fields default to unset: no request timeout and reqwest's own proxy
/// detection.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
  pub timeout: Option<Duration>,
  pub proxy: Option<String>,
}

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) origin: Origin,
  pub(crate) auth: Option<JiraAuth>,
}

impl JiraClient {
  /// Create a new Jira client with default transport settings
  pub fn new(origin: Origin, auth: Option<JiraAuth>) -> Self {
    let client = Client::new();
    Self { client, origin, auth }
  }

  /// Create a new Jira client with a timeout and/or proxy applied
  pub fn with_options(origin: Origin, auth: Option<JiraAuth>, options: &ClientOptions) -> Result<Self> {
    let mut builder = Client::builder();

    if let Some(timeout) = options.timeout {
      builder = builder.timeout(timeout);
    }
    if let Some(proxy) = &options.proxy {
      let proxy = Proxy::all(proxy).with_context(|| format!("Invalid proxy URL '{proxy}'"))?;
      builder = builder.proxy(proxy);
    }

    let client = builder.build().context("Failed to build HTTP client")?;
    Ok(Self { client, origin, auth })
  }

  /// The origin every request is resolved against
  pub fn origin(&self) -> &Origin {
    &self.origin
  }

  /// Whether requests carry basic-auth credentials
  pub fn is_authenticated(&self) -> bool {
    self.auth.is_some()
  }

  /// Start a GET request with the headers every Jira call shares
  pub(crate) fn get(&self, url: Url) -> RequestBuilder {
    let request = self
      .client
      .get(url)
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT);

    match &self.auth {
      Some(auth) => request.basic_auth(&auth.username, Some(&auth.api_token)),
      None => request,
    }
  }

  /// Test the Jira connection by fetching the current user
  #[instrument(skip(self), level = "debug")]
  pub async fn test_connection(&self) -> Result<bool> {
    let url = self.origin.endpoint(MYSELF_PATH)?;

    let response = self.get(url).send().await.context("Failed to connect to Jira")?;
    debug!("Jira connection test status: {}", response.status());

    Ok(response.status().is_success())
  }
}
