//! Transport abstraction between the API client and the browser.
//!
//! The UI implements [`Transport`] on top of `fetch`; tests implement it with a
//! recording fake.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;
use crate::models::MessageResponse;
use crate::result::Result;

/// HTTP verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// One outgoing API call, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a POST request carrying `body` as JSON.
    ///
    /// # Errors
    /// Returns `JsonParseFailed` if `body` cannot be serialized.
    pub fn post<B: serde::Serialize>(path: impl Into<String>, body: &B) -> Result<Self> {
        Ok(Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// Builder pattern: append a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Absolute URL for this request with the query string encoded.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when `base_url` cannot be joined with the path.
    pub fn url(&self, base_url: &str) -> Result<String> {
        let joined = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        let mut url = url::Url::parse(&joined)
            .map_err(|e| Error::invalid_config(format!("bad request URL '{joined}': {e}")))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url.to_string())
    }
}

/// Status and raw body of a completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    /// Returns `JsonParseFailed` for an undecodable body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The server's `message` field, if the body has one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.json::<MessageResponse>()
            .ok()
            .map(|m| m.message)
            .filter(|m| !m.trim().is_empty())
    }

    /// Turn a non-2xx response into `Error::Http`.
    ///
    /// # Errors
    /// Returns `Http` with the server message (or the status line) for non-2xx.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let message = self
            .message()
            .unwrap_or_else(|| format!("request failed with status {}", self.status));
        Err(Error::http(self.status, message))
    }
}

/// Sends [`ApiRequest`]s somewhere and returns the raw response.
///
/// Implementations report transport-level failures as `Error::Network`; any
/// HTTP status, including 4xx and 5xx, is a successful send.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}
