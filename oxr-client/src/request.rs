//! Authenticated GET requests against the provider.

use oxr_types::{ErrorBody, HttpTransport, OxrError, QueryParams, TransportError};
use reqwest::Url;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://openexchangerates.org/api";

const APP_ID_PARAM: &str = "app_id";
const DECODE_ERROR_STATUS: u16 = 200;

/// Builds request URLs, sends them through the transport and decodes the body.
pub struct RequestClient<T> {
    base_url: String,
    app_id: String,
    transport: T,
}

impl<T> RequestClient<T> {
    pub fn new(app_id: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: app_id.into(),
            transport,
        }
    }

    /// Points the client at another API root (a proxy or a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path`, with `app_id` ahead of the caller's parameters.
    ///
    /// An `app_id` entry in `params` is ignored. A malformed base URL is
    /// reported as a network error.
    pub fn build_url(&self, path: &str, params: &QueryParams) -> Result<Url, OxrError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url,
            path.trim_start_matches('/')
        ))
        .map_err(|e| OxrError::Network(TransportError::new(e)))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(APP_ID_PARAM, &self.app_id);
            for (key, value) in params.iter().filter(|(key, _)| *key != APP_ID_PARAM) {
                pairs.append_pair(key, &value.to_query_value());
            }
        }
        Ok(url)
    }
}

impl<T: HttpTransport> RequestClient<T> {
    /// GETs `path` and returns the decoded JSON value.
    pub async fn get(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<serde_json::Value, OxrError> {
        self.get_json(path, params).await
    }

    /// GETs `path` and decodes the body into `R`.
    ///
    /// A 2xx body that does not decode is reported as `Api` with status 200,
    /// whatever the actual success code was.
    pub async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<R, OxrError> {
        let url = self.build_url(path, params)?;

        tracing::debug!(path, params = params.len(), "sending request");
        let resp = self.transport.get(url.as_str()).await?;
        tracing::debug!(path, status = resp.status, "received response");

        if !resp.is_success() {
            let err = api_error(resp.status, &resp.body);
            tracing::warn!(path, status = resp.status, "request rejected: {}", err);
            return Err(err);
        }

        serde_json::from_str(&resp.body).map_err(|e| OxrError::Api {
            status: DECODE_ERROR_STATUS,
            message: "decode error".to_string(),
            description: e.to_string(),
        })
    }
}

fn api_error(status: u16, body: &str) -> OxrError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message,
            description,
        }) => OxrError::Api {
            status,
            message,
            description,
        },
        Err(_) => OxrError::Api {
            status,
            message: "unknown".to_string(),
            description: "unparseable error body".to_string(),
        },
    }
}
