//! Configuration management for the Phish.in CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file. The configuration
//! system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory

use std::{env, path::PathBuf};

/// Default base URL of the Phish.in v1 API.
pub const DEFAULT_API_URL: &str = "https://phish.in/api/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for the file under the platform-specific local data directory at
/// `phishin/.env` (e.g. `~/.local/share/phishin/.env` on Linux). A missing
/// file is not an error; the API key may be set directly in the environment.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("phishin/.env");
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Phish.in API key.
///
/// Every request carries this key as a bearer token. Keys may be requested
/// via <https://phish.in/contact-info>.
///
/// # Errors
///
/// Returns an error when the `PHISHIN_API_KEY` environment variable is not
/// set; the caller treats this as a fatal startup error.
pub fn api_key() -> Result<String, String> {
    env::var("PHISHIN_API_KEY").map_err(|_| {
        "please set the PHISHIN_API_KEY environment variable and try again\n\
         keys may be requested via https://phish.in/contact-info"
            .to_string()
    })
}

/// Returns the base URL for the Phish.in API.
///
/// The `PHISHIN_API_URL` environment variable overrides the default; useful
/// for pointing the client at a local stub server.
pub fn api_url() -> String {
    env::var("PHISHIN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
