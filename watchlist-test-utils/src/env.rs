//! Environment variable management for testing
//!
//! Tests that read process-wide variables such as `JIRA_HOST` would race each
//! other under the parallel test runner, so every [`EnvVarGuard`] holds a
//! process-wide lock for as long as it lives.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Overrides a single environment variable and restores it on drop.
pub struct EnvVarGuard {
  name: &'static str,
  original: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Capture the current value of `name`. The variable is left untouched
  /// until [`set`](Self::set) or [`remove`](Self::remove) is called.
  pub fn new(name: &'static str) -> Self {
    let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let original = env::var(name).ok();

    Self {
      name,
      original,
      _lock: lock,
    }
  }

  /// Set the variable for the lifetime of the guard.
  pub fn set(&self, value: &str) {
    // SAFETY: ENV_LOCK serializes every guarded mutation in this process.
    unsafe {
      env::set_var(self.name, value);
    }
  }

  /// Unset the variable for the lifetime of the guard.
  pub fn remove(&self) {
    // SAFETY: ENV_LOCK serializes every guarded mutation in this process.
    unsafe {
      env::remove_var(self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    // SAFETY: the lock is still held; it is released after this body runs.
    match &self.original {
      Some(value) => unsafe {
        env::set_var(self.name, value);
      },
      None => unsafe {
        env::remove_var(self.name);
      },
    }
  }
}
