//! HTTP transport port.
//!
//! Implementations perform a single GET and hand back the raw status and
//! body. Connection handling, TLS and timeouts are their business.

use crate::error::TransportError;

/// Raw response as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port trait for issuing HTTP GET requests.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a GET to the fully built `url`.
    ///
    /// Only failures to obtain a response are errors; any status code,
    /// including 4xx and 5xx, comes back as `Ok`.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}
