//! # Command Line Interface
//!
//! Argument definitions and the handler that wires configuration, the Jira
//! client and the watch list invoker together.

use anyhow::{Context, Result, bail};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, ValueEnum};
use tokio::runtime::Runtime;
use tracing::{debug, info};
use watchlist_jira::{FailurePolicy, Invocation, JiraClient, StreamLog, WatchInvoker};

use crate::config::WatchConfig;
use crate::output::print_success;

/// Top-level CLI command for watchlist
#[derive(Parser, Debug)]
#[command(name = "watchlist")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Log the Jira issues you are watching")]
#[command(
  long_about = "Searches Jira for every issue watched by the current user and writes one\n\
        'Watching <KEY>' line per issue to standard error, in the order Jira returns them.\n\n\
        The Jira host comes from --host or the JIRA_HOST environment variable. Credentials\n\
        are read from ~/.netrc (machine <host>, then machine atlassian.net) when present."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Jira host URL (e.g., https://company.atlassian.net); defaults to $JIRA_HOST
  #[arg(long, value_name = "URL")]
  pub host: Option<String>,

  /// What to do when the search fails
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = FailurePolicyArg::Silent,
  )]
  pub on_failure: FailurePolicyArg,

  /// Give up on the request after this many seconds
  #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
  pub timeout: Option<u64>,

  /// Send the request through this proxy
  #[arg(long, value_name = "URL")]
  pub proxy: Option<String>,

  /// Do not read credentials from ~/.netrc
  #[arg(long)]
  pub no_netrc: bool,

  /// Only test the connection to Jira
  #[arg(long)]
  pub check: bool,
}

/// Failure policy argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicyArg {
  /// Print nothing and exit successfully
  Silent,
  /// Print the error and exit with a failure status
  Report,
}

impl From<FailurePolicyArg> for FailurePolicy {
  fn from(arg: FailurePolicyArg) -> Self {
    match arg {
      FailurePolicyArg::Silent => FailurePolicy::Silent,
      FailurePolicyArg::Report => FailurePolicy::Report,
    }
  }
}

/// Resolve configuration and run the command to completion
pub fn handle_cli(cli: Cli) -> Result<()> {
  let config = WatchConfig::from_cli(&cli)?;
  let rt = Runtime::new().context("Failed to create async runtime")?;
  rt.block_on(run(config))
}

/// Run the watch list search, or the connection check, for `config`
pub async fn run(config: WatchConfig) -> Result<()> {
  let auth = config.credentials()?;
  let client = JiraClient::with_options(config.origin.clone(), auth, &config.client_options)?;

  if config.check {
    return check_connection(&client).await;
  }

  let pending = WatchInvoker::new(client, StreamLog::stderr(), config.origin)
    .with_policy(config.policy)
    .dispatch();
  debug!("Watch list search dispatched");

  match pending.await.context("Watch list search task failed")? {
    Ok(Invocation::Logged { count }) => info!("Logged {} watched issues", count),
    Ok(Invocation::FailureSuppressed) => debug!("Watch list search failed; nothing logged"),
    Err(error) => return Err(error).context("Watch list search failed"),
  }

  Ok(())
}

async fn check_connection(client: &JiraClient) -> Result<()> {
  if client.test_connection().await? {
    print_success(&format!("Connected to Jira at {}", client.origin()));
    return Ok(());
  }

  if client.is_authenticated() {
    bail!("Jira at {} rejected the request. Check your .netrc credentials.", client.origin());
  }
  bail!(
    "Jira at {} rejected the request and no .netrc credentials were found.",
    client.origin()
  )
}
