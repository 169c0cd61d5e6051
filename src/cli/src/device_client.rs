use anyhow::{Context, Result};
use crux_http::{
    HttpError,
    protocol::{HttpHeader, HttpRequest, HttpResponse, HttpResult},
};
use log::debug;
use reqwest::{Client, Method};
use std::time::Duration;
use wifi_setup_core::endpoint_of;

/// Executes the core's HTTP effects against the device
#[derive(Clone, Debug)]
pub struct DeviceClient {
    client: Client,
    base_url: String,
}

impl DeviceClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        // The device is reached directly on its own access point
        let client = Client::builder()
            .no_proxy()
            .timeout(request_timeout)
            .build()
            .context("failed to create device HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Device address the core's relative URL points to
    pub fn url_for(&self, core_url: &str) -> String {
        format!("{}{}", self.base_url, endpoint_of(core_url))
    }

    /// Run a request; failures are reported to the core, never raised
    pub async fn execute(&self, request: &HttpRequest) -> HttpResult {
        match self.send(request).await {
            Ok(response) => HttpResult::Ok(response),
            Err(e) => HttpResult::Err(e),
        }
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| HttpError::Url(format!("invalid method {}: {e}", request.method)))?;
        let url = self.url_for(&request.url);

        debug!("{method} {url}");

        let mut builder = self.client.request(method, &url);
        for header in &request.headers {
            builder = builder.header(&header.name, &header.value);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder.send().await.map_err(map_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|value| HttpHeader {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            })
            .collect();
        let body = response.bytes().await.map_err(map_error)?.to_vec();

        debug!("{url} answered {status}");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn map_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Io(e.to_string())
    }
}
