//! Output for watched issues.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

/// The line emitted for a watched issue: `Watching ` followed by the key.
pub fn watch_line(key: &str) -> String {
  format!("Watching {key}")
}

/// Receives one call per watched issue, in response order.
pub trait WatchLog: Send + Sync {
  fn watching(&self, key: &str);
}

impl<L: WatchLog + ?Sized> WatchLog for Arc<L> {
  fn watching(&self, key: &str) {
    (**self).watching(key);
  }
}

/// Writes each watch line, newline terminated, to a byte stream.
pub struct StreamLog<W> {
  writer: Mutex<W>,
}

impl StreamLog<io::Stderr> {
  /// Log to the process's standard error stream.
  pub fn stderr() -> Self {
    Self::new(io::stderr())
  }
}

impl<W: Write + Send> StreamLog<W> {
  pub fn new(writer: W) -> Self {
    Self {
      writer: Mutex::new(writer),
    }
  }

  pub fn into_inner(self) -> W {
    self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<W: Write + Send> WatchLog for StreamLog<W> {
  fn watching(&self, key: &str) {
    let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = writeln!(writer, "{}", watch_line(key)).and_then(|()| writer.flush()) {
      warn!("Failed to write watch line for {}: {}", key, e);
    }
  }
}

/// Keeps watch lines in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
  lines: Mutex<Vec<String>>,
}

impl MemoryLog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Lines logged so far, oldest first.
  pub fn lines(&self) -> Vec<String> {
    self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }
}

impl WatchLog for MemoryLog {
  fn watching(&self, key: &str) {
    self
      .lines
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push(watch_line(key));
  }
}
