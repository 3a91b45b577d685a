//! Phish.in CLI Library
//!
//! This library implements a command-line client for the read-only
//! [Phish.in](https://phish.in/) live music archive API. It turns one
//! invocation's arguments into a validated query, fetches the matching
//! records, and renders them as aligned text tables or pretty JSON.
//!
//! # Modules
//!
//! - `api` - HTTP client for the Phish.in API
//! - `cli` - Per-endpoint pipelines and the endpoint dispatcher
//! - `config` - Environment variables and `.env` handling
//! - `display` - Flattened, render-ready projections of wire data
//! - `download` - Bounded-concurrency media downloads with progress
//! - `error` - Typed error taxonomy
//! - `query` - Argument normalization into an immutable query spec
//! - `render` - Text table and JSON rendering
//! - `types` - Wire-shaped data structures

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod download;
pub mod error;
pub mod query;
pub mod render;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Fallible layers attach a short, layer-identifying context message as
/// errors rise toward the single top-level handler in `main`.
pub type Res<T> = anyhow::Result<T>;

/// Prints an informational message with a blue bullet point.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable startup errors where no cleanup remains to be done.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
