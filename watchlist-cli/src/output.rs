//! # Output Formatting
//!
//! Status lines for the command itself. Watch lines are written by the
//! library's `StreamLog` and never pass through here.

use owo_colors::OwoColorize;

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Format a success message
pub fn format_success(message: &str) -> String {
  let check = get_emoji_or_default("check_mark", "✓");
  format!("{} {}", check.green().bold(), message)
}

/// Format an error message
pub fn format_error(message: &str) -> String {
  let cross = get_emoji_or_default("cross_mark", "✗");
  format!("{} {}", cross.red().bold(), message)
}

/// Print a success message
#[allow(clippy::print_stdout)]
pub fn print_success(message: &str) {
  println!("{}", format_success(message));
}

/// Print an error message
#[allow(clippy::print_stderr)]
pub fn print_error(message: &str) {
  eprintln!("{}", format_error(message));
}
