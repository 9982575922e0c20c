//! `fetch`-backed transport for the API client.

use async_trait::async_trait;
use gloo_net::http::Request;
use plantknight_core::Error;
use plantknight_core::api::{ApiRequest, ApiResponse, HttpMethod, Transport};

/// Sends requests to the PlantKnight API through the browser's `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> plantknight_core::Result<ApiResponse> {
        let url = request.url(&self.base_url)?;
        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };

        // fetch only rejects when no response arrived at all
        let response = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| Error::json_parse_failed(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(e.to_string()))?;
        Ok(ApiResponse::new(status, body))
    }
}
