//! reqwest-backed [`HttpTransport`].

use oxr_types::{HttpResponse, HttpTransport, TransportError};
use reqwest::Client;
use reqwest::header::ACCEPT;

/// Production transport. Timeouts, proxies and TLS come from the wrapped client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured `reqwest::Client`.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        // reqwest errors carry the URL, and with it the app id.
        let resp = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::new(e.without_url()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::new(e.without_url()))?;
        Ok(HttpResponse { status, body })
    }
}
