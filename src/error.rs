//! Typed error taxonomy for the Phish.in CLI.
//!
//! Errors are grouped by the layer that produced them: argument handling
//! (no network call has happened yet), the HTTP/decode layer, and the bulk
//! downloader. Higher layers wrap these with context messages on the way up
//! to the single top-level handler in `main`.

use thiserror::Error;

use crate::query::ENDPOINT_LIST;

/// A bad or missing command-line flag or endpoint argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The endpoint requires a search query and none was given.
    #[error("need a {0}")]
    MissingQuery(&'static str),

    /// The output flag resolved to something other than text or json.
    #[error("output must be \"text\" or \"json\", got {0:?}")]
    InvalidOutputFormat(String),

    /// The endpoint argument names no known endpoint.
    #[error("{0} is not a recognized command\n{ENDPOINT_LIST}")]
    UnrecognizedCommand(String),
}

/// A failure while talking to the API or decoding its response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request itself failed before a response arrived.
    #[error("error making request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The resource was not found. Mistyped identifiers are the dominant
    /// failure mode, so the top-level handler prints search tips for this.
    #[error("unexpected response status: {0:?}")]
    NotFound(String),

    /// Any other non-200 response.
    #[error("unexpected response status: {0:?}")]
    Status(String),

    /// The body arrived but was not the expected shape. The raw body has
    /// already been surfaced on the diagnostic stream by the client.
    #[error("error decoding json response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One or more tasks in a bulk download batch failed. Completed and partial
/// files from the same batch are kept.
#[derive(Debug, Clone, Error)]
#[error("unable to download: {0}")]
pub struct DownloadError(pub String);

impl DownloadError {
    pub fn from_names(names: &[String]) -> Self {
        DownloadError(names.join(", "))
    }
}
