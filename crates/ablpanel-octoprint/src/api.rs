//! REST API client for plugin commands.

use reqwest::{StatusCode, Url, header};
use serde::Serialize;
use thiserror::Error;

/// Errors produced while issuing API requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL (or the path joined onto it) is invalid.
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The command could not be serialized to JSON.
    #[error("invalid command body: {0}")]
    Body(#[from] serde_json::Error),
    /// The request could not be sent or the response not received.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status code.
    #[error("server rejected the command: {0}")]
    Status(StatusCode),
}

/// Client for the OctoPrint REST API, scoped to plugin commands.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    api_key: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Builds a client for the OctoPrint instance at `base_url`.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ApiError> {
        // Url::join drops the last path segment without the trailing slash.
        let mut base = base_url.to_owned();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            base: Url::parse(&base)?,
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        })
    }

    /// URL of the SimpleApiPlugin command endpoint for `plugin_id`.
    fn plugin_url(&self, plugin_id: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(&format!("api/plugin/{plugin_id}"))?)
    }

    /// Sends a command to the plugin-scoped API endpoint.
    ///
    /// The response body is not consumed; only the status code is checked.
    pub async fn plugin_command<T: Serialize + ?Sized>(
        &self,
        plugin_id: &str,
        command: &T,
    ) -> Result<(), ApiError> {
        let url = self.plugin_url(plugin_id)?;
        let response = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json; charset=UTF-8")
            .header("X-Api-Key", &self.api_key)
            .body(serde_json::to_string(command)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ApiClient;

    #[test]
    fn plugin_url_is_scoped_to_the_api_root() {
        let client = ApiClient::new("http://octopi.local", "key").unwrap();
        assert_eq!(
            client.plugin_url("SmartABL").unwrap().as_str(),
            "http://octopi.local/api/plugin/SmartABL"
        );
    }

    #[test]
    fn trailing_slash_and_subpath_are_preserved() {
        let client = ApiClient::new("http://box:5000/octoprint/", "key").unwrap();
        assert_eq!(
            client.plugin_url("SmartABL").unwrap().as_str(),
            "http://box:5000/octoprint/api/plugin/SmartABL"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(ApiClient::new("not a url", "key").is_err());
    }
}
