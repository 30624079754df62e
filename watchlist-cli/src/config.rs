//! # Configuration
//!
//! Resolves command-line flags and the environment into a [`WatchConfig`].
//! There is no configuration file.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::BaseDirs;
use tracing::debug;
use watchlist_jira::creds::find_jira_credentials;
use watchlist_jira::{ClientOptions, FailurePolicy, JiraAuth, Origin, resolve_jira_origin};

use crate::cli::Cli;

/// Everything needed to run one invocation
#[derive(Debug, Clone)]
pub struct WatchConfig {
  pub origin: Origin,
  pub policy: FailurePolicy,
  pub client_options: ClientOptions,
  /// Home directory searched for `.netrc`; `None` disables the lookup
  pub home: Option<PathBuf>,
  pub check: bool,
}

impl WatchConfig {
  /// Build the configuration from parsed arguments.
  ///
  /// `--host` wins over `$JIRA_HOST`.
  pub fn from_cli(cli: &Cli) -> Result<Self> {
    let origin = match &cli.host {
      Some(host) => Origin::parse(host).context("Invalid value for --host")?,
      None => resolve_jira_origin()?,
    };
    debug!("Using Jira origin {}", origin);

    let home = if cli.no_netrc {
      None
    } else {
      BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    };

    Ok(Self {
      origin,
      policy: cli.on_failure.into(),
      client_options: ClientOptions {
        timeout: cli.timeout.map(Duration::from_secs),
        proxy: cli.proxy.clone(),
      },
      home,
      check: cli.check,
    })
  }

  /// Credentials for the origin, if a `.netrc` entry exists
  pub fn credentials(&self) -> Result<Option<JiraAuth>> {
    match &self.home {
      Some(home) => find_jira_credentials(home, &self.origin),
      None => Ok(None),
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::Parser;
  use watchlist_jira::consts::ENV_JIRA_HOST;
  use watchlist_test_utils::{EnvVarGuard, NetrcGuard};

  use super::*;

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("watchlist").chain(args.iter().copied())).unwrap()
  }

  #[test]
  fn test_defaults() {
    let config = WatchConfig::from_cli(&parse(&["--host", "jira.example.com"])).unwrap();

    assert_eq!(config.origin.to_string(), "https://jira.example.com");
    assert_eq!(config.policy, FailurePolicy::Silent);
    assert!(config.client_options.timeout.is_none());
    assert!(config.client_options.proxy.is_none());
    assert!(!config.check);
  }

  #[test]
  fn test_all_flags() {
    let cli = parse(&[
      "--host",
      "http://localhost:8080/jira/",
      "--on-failure",
      "REPORT",
      "--timeout",
      "10",
      "--proxy",
      "http://proxy.example.com:8080",
      "--no-netrc",
      "--check",
    ]);
    let config = WatchConfig::from_cli(&cli).unwrap();

    assert_eq!(config.origin.to_string(), "http://localhost:8080/jira");
    assert_eq!(config.policy, FailurePolicy::Report);
    assert_eq!(config.client_options.timeout, Some(Duration::from_secs(10)));
    assert_eq!(
      config.client_options.proxy.as_deref(),
      Some("http://proxy.example.com:8080")
    );
    assert!(config.home.is_none());
    assert!(config.check);
  }

  #[test]
  fn test_zero_timeout_is_rejected() {
    let result = Cli::try_parse_from(["watchlist", "--timeout", "0"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_host_from_environment() {
    let guard = EnvVarGuard::new(ENV_JIRA_HOST);
    guard.set("company.atlassian.net");

    let config = WatchConfig::from_cli(&parse(&[])).unwrap();
    assert_eq!(config.origin.to_string(), "https://company.atlassian.net");
  }

  #[test]
  fn test_flag_overrides_environment() {
    let guard = EnvVarGuard::new(ENV_JIRA_HOST);
    guard.set("company.atlassian.net");

    let config = WatchConfig::from_cli(&parse(&["--host", "other.example.com"])).unwrap();
    assert_eq!(config.origin.to_string(), "https://other.example.com");
  }

  #[test]
  fn test_missing_host() {
    let guard = EnvVarGuard::new(ENV_JIRA_HOST);
    guard.remove();

    let error = WatchConfig::from_cli(&parse(&[])).unwrap_err().to_string();
    assert!(error.contains(ENV_JIRA_HOST));
  }

  #[test]
  fn test_credentials_from_home() {
    let netrc = NetrcGuard::new("machine jira.example.com login me@example.com password secret\n");
    let mut config = WatchConfig::from_cli(&parse(&["--host", "jira.example.com"])).unwrap();
    config.home = Some(netrc.home_dir().to_path_buf());

    let auth = config.credentials().unwrap().unwrap();
    assert_eq!(auth.username, "me@example.com");
    assert_eq!(auth.api_token, "secret");
  }

  #[test]
  fn test_no_netrc_skips_credentials() {
    let config = WatchConfig::from_cli(&parse(&["--host", "jira.example.com", "--no-netrc"])).unwrap();
    assert!(config.credentials().unwrap().is_none());
  }
}
