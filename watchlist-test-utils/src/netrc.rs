use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII guard for a temporary home directory holding a `.netrc` file.
///
/// Nothing global is changed; pass [`home_dir`](Self::home_dir) to the code
/// under test, or set it as `HOME` on a spawned command. The directory is
/// removed when the guard is dropped.
pub struct NetrcGuard {
  temp_dir: TempDir,
}

impl NetrcGuard {
  /// Create a home directory whose `.netrc` holds `content`
  pub fn new(content: &str) -> Self {
    let guard = Self::empty_home();
    fs::write(guard.netrc_path(), content).expect("Failed to write test .netrc");
    guard
  }

  /// Create a home directory with no `.netrc` at all
  pub fn empty_home() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    Self { temp_dir }
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> PathBuf {
    self.temp_dir.path().join(".netrc")
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
