//! Read-only `.netrc` credential lookup.
//!
//! Credentials stand in for the session a browser would attach implicitly.
//! They are optional: when none are found the search is sent without an
//! `Authorization` header.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::consts::FALLBACK_NETRC_MACHINE;
use crate::models::JiraAuth;
use crate::origin::Origin;

/// Returns the path to the `.netrc` file for the provided home directory.
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Find the `login`/`password` pair for `target_machine` in netrc content.
///
/// Tokens are whitespace separated, so single-line
/// (`machine host login user password pass`) and multi-line entries parse
/// the same way. The first entry for a machine wins. Entries missing either
/// value yield `None`.
pub fn parse_netrc(content: &str, target_machine: &str) -> Option<JiraAuth> {
  let mut tokens = content.split_whitespace();
  let mut in_target = false;
  let mut username = None;
  let mut password = None;

  while let Some(token) = tokens.next() {
    match token {
      "machine" => {
        if in_target {
          break;
        }
        in_target = tokens.next() == Some(target_machine);
      }
      "default" => {
        if in_target {
          break;
        }
      }
      "login" => {
        let value = tokens.next();
        if in_target {
          username = value;
        }
      }
      "password" => {
        let value = tokens.next();
        if in_target {
          password = value;
        }
      }
      _ => {}
    }
  }

  match (username, password) {
    (Some(username), Some(password)) => Some(JiraAuth {
      username: username.to_string(),
      api_token: password.to_string(),
    }),
    _ => None,
  }
}

/// Look up Jira credentials for `origin` in `<home>/.netrc`.
///
/// The origin's host is tried first, then the shared `atlassian.net` entry.
/// A missing file is not an error.
pub fn find_jira_credentials(home: &Path, origin: &Origin) -> Result<Option<JiraAuth>> {
  let netrc_path = get_netrc_path(home);
  if !netrc_path.exists() {
    debug!("No .netrc file at {}", netrc_path.display());
    return Ok(None);
  }

  let content = std::fs::read_to_string(&netrc_path)
    .with_context(|| format!("Failed to read {}", netrc_path.display()))?;

  for machine in [origin.host(), FALLBACK_NETRC_MACHINE] {
    if let Some(auth) = parse_netrc(&content, machine) {
      debug!("Using .netrc credentials for machine '{}'", machine);
      return Ok(Some(auth));
    }
  }

  debug!(
    "No .netrc entry for '{}' or '{}'",
    origin.host(),
    FALLBACK_NETRC_MACHINE
  );
  Ok(None)
}
