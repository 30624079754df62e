//! Origin handling for the Jira REST API.
//!
//! An origin is the scheme, host and optional port of a Jira deployment, plus
//! an optional context path for servers not mounted at `/`. Every endpoint the
//! client calls is resolved relative to it.

use std::fmt;

use anyhow::{Context, Result, bail};
use url::Url;

use crate::consts::ENV_JIRA_HOST;

/// A validated `http`/`https` base URL for a Jira deployment.
///
/// The wrapped URL never carries a query or fragment and its path always ends
/// with `/`, so relative endpoints can be joined onto it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(Url);

impl Origin {
  /// Parse a user-supplied Jira host.
  ///
  /// Hosts without a scheme are assumed to be `https://`. Query strings and
  /// fragments are dropped, as is any trailing `/` on the path.
  pub fn parse(input: &str) -> Result<Self> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
      bail!("Host cannot be empty");
    }

    let candidate = if trimmed.contains("://") {
      trimmed.to_string()
    } else {
      format!("https://{trimmed}")
    };

    let mut url = Url::parse(&candidate).with_context(|| format!("Failed to parse Jira host '{trimmed}'"))?;

    if !matches!(url.scheme(), "http" | "https") {
      bail!(
        "Unsupported scheme '{}' in Jira host '{trimmed}'. Use http:// or https://.",
        url.scheme()
      );
    }
    if url.host_str().is_none_or(str::is_empty) {
      bail!("Jira host '{trimmed}' has no host name");
    }

    url.set_query(None);
    url.set_fragment(None);
    let path = format!("{}/", url.path().trim_end_matches('/'));
    url.set_path(&path);

    Ok(Self(url))
  }

  /// Host name of the origin, without scheme or port.
  pub fn host(&self) -> &str {
    self.0.host_str().unwrap_or_default()
  }

  /// Resolve an endpoint path (without a leading `/`) against the origin.
  pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
    self.0.join(path)
  }
}

impl fmt::Display for Origin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.0.as_str().trim_end_matches('/'))
  }
}

/// Read the origin from the `$JIRA_HOST` environment variable.
///
/// Returns an error naming the variable if it is not set.
pub fn resolve_jira_origin() -> Result<Origin> {
  match std::env::var(ENV_JIRA_HOST) {
    Ok(host) => Origin::parse(&host).with_context(|| format!("Invalid value in '{ENV_JIRA_HOST}'")),
    Err(_) => Err(anyhow::anyhow!(
      "Jira host environment variable '{ENV_JIRA_HOST}' not set"
    )),
  }
}

#[cfg(test)]
mod tests {
  use watchlist_test_utils::EnvVarGuard;

  use super::*;

  #[test]
  fn test_parse_with_https() {
    let origin = Origin::parse("https://company.atlassian.net").unwrap();
    assert_eq!(origin.to_string(), "https://company.atlassian.net");
    assert_eq!(origin.host(), "company.atlassian.net");
  }

  #[test]
  fn test_parse_with_http_and_port() {
    let origin = Origin::parse("http://localhost:8080").unwrap();
    assert_eq!(origin.to_string(), "http://localhost:8080");
    assert_eq!(origin.host(), "localhost");
  }

  #[test]
  fn test_parse_without_scheme() {
    let origin = Origin::parse("company.atlassian.net").unwrap();
    assert_eq!(origin.to_string(), "https://company.atlassian.net");
  }

  #[test]
  fn test_parse_ip_address_with_port() {
    let origin = Origin::parse("192.168.1.100:8080").unwrap();
    assert_eq!(origin.to_string(), "https://192.168.1.100:8080");
  }

  #[test]
  fn test_parse_uppercase_scheme() {
    let origin = Origin::parse("HTTP://example.com").unwrap();
    assert_eq!(origin.to_string(), "http://example.com");
  }

  #[test]
  fn test_parse_trims_whitespace_and_trailing_slash() {
    let origin = Origin::parse("  https://example.com/  ").unwrap();
    assert_eq!(origin.to_string(), "https://example.com");
  }

  #[test]
  fn test_parse_keeps_context_path() {
    let origin = Origin::parse("https://corp.example/jira/").unwrap();
    assert_eq!(origin.to_string(), "https://corp.example/jira");
  }

  #[test]
  fn test_parse_drops_query_and_fragment() {
    let origin = Origin::parse("https://example.com/jira?foo=bar#top").unwrap();
    assert_eq!(origin.to_string(), "https://example.com/jira");
  }

  #[test]
  fn test_parse_empty_string() {
    let error = Origin::parse("   ").unwrap_err().to_string();
    assert!(error.contains("Host cannot be empty"));
  }

  #[test]
  fn test_parse_rejects_other_schemes() {
    let error = Origin::parse("ftp://example.com").unwrap_err().to_string();
    assert!(error.contains("ftp"));
  }

  #[test]
  fn test_endpoint_at_root() {
    let origin = Origin::parse("https://example.com").unwrap();
    let url = origin.endpoint("rest/api/2/search").unwrap();
    assert_eq!(url.as_str(), "https://example.com/rest/api/2/search");
  }

  #[test]
  fn test_endpoint_under_context_path() {
    let origin = Origin::parse("https://example.com/jira").unwrap();
    let url = origin.endpoint("rest/api/2/search").unwrap();
    assert_eq!(url.as_str(), "https://example.com/jira/rest/api/2/search");
  }

  #[test]
  fn test_resolve_jira_origin_with_env_var() {
    let guard = EnvVarGuard::new(ENV_JIRA_HOST);
    guard.set("company.atlassian.net");

    let origin = resolve_jira_origin().unwrap();
    assert_eq!(origin.to_string(), "https://company.atlassian.net");
  }

  #[test]
  fn test_resolve_jira_origin_missing_env_var() {
    let guard = EnvVarGuard::new(ENV_JIRA_HOST);
    guard.remove();

    let error = resolve_jira_origin().unwrap_err().to_string();
    assert!(error.contains(ENV_JIRA_HOST));
  }
}
