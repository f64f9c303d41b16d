//! Per-client configuration.

use std::fmt;

use super::{ParamValue, QueryParams};

pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Settings owned by one client instance.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub app_id: String,
    pub base_currency: String,
    pub show_alternative: bool,
}

impl ClientConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            show_alternative: false,
        }
    }

    pub fn with_base_currency(mut self, currency: impl Into<String>) -> Self {
        self.base_currency = currency.into();
        self
    }

    pub fn with_show_alternative(mut self, show: bool) -> Self {
        self.show_alternative = show;
        self
    }

    /// The `base` and `show_alternative` parameters shared by the rate endpoints.
    pub fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("base", self.base_currency.as_str())
            .with("show_alternative", self.show_alternative)
    }

    /// Recovers base currency and alternative flag from decoded query pairs.
    ///
    /// Missing keys fall back to the defaults. The app id is left empty.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = ClientConfig::new(String::new());
        for (key, value) in pairs {
            match key {
                "base" => config.base_currency = value.to_string(),
                "show_alternative" => config.show_alternative = matches!(value, "1" | "true"),
                _ => {}
            }
        }
        config
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_id", &"<redacted>")
            .field("base_currency", &self.base_currency)
            .field("show_alternative", &self.show_alternative)
            .finish()
    }
}
