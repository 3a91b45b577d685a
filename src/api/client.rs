use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config;
use crate::error::ApiError;
use crate::query::QuerySpec;

/// Authenticated HTTP client for the Phish.in API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    debug: bool,
}

impl Client {
    pub fn new(api_key: String) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url: config::api_url(),
            api_key,
            debug: false,
        }
    }

    /// Echo each constructed URL before fetching it.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Overrides the base URL; handy for pointing at a stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the request URL for a query spec.
    ///
    /// An identifier routes to the detail resource and parameters are never
    /// mixed in; the normalizer guarantees the parameter list is empty in
    /// that case.
    pub fn format_url(&self, spec: &QuerySpec) -> String {
        let path = spec.endpoint.path();
        if let Some(identifier) = &spec.identifier {
            return format!("{}/{}/{}", self.base_url, path, identifier);
        }
        let url = format!("{}/{}", self.base_url, path);
        if spec.parameters.is_empty() {
            url
        } else {
            format!("{}?{}", url, spec.parameters.join("&"))
        }
    }

    /// Performs an authenticated GET and decodes the body into `T`.
    ///
    /// On a decode failure the raw body is surfaced on stderr so the user
    /// can see what the server actually sent.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| {
            eprintln!("error decoding json response: {body}");
            ApiError::Decode(e)
        })
    }

    /// Performs an authenticated GET and decodes the body into a generic
    /// pass-through value; used by raw output mode.
    pub async fn get_value(&self, url: &str) -> Result<Value, ApiError> {
        self.get_json(url).await
    }

    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        if self.debug {
            println!("{url}");
        }
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            if status == StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound(status.to_string()));
            }
            return Err(ApiError::Status(status.to_string()));
        }
        Ok(response.text().await?)
    }
}
