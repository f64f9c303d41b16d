//! # OXR Client SDK
//!
//! A typed async client for the Open Exchange Rates API.
//!
//! # Example
//! ```no_run
//! use oxr_client::OpenExchangeRates;
//!
//! # async fn run() -> Result<(), oxr_types::OxrError> {
//! let mut oxr = OpenExchangeRates::new("my-app-id");
//! oxr.set_base_currency("EUR").set_show_alternative(true);
//!
//! let rates = oxr.latest_rates(["GBP", "JPY"]).await?;
//! let candles = oxr.ohlc_rates("2023-06-01T10:30:00Z", "5m", "GBP").await?;
//! # Ok(())
//! # }
//! ```
//!
//! One instance owns its configuration. The setters take `&mut self`, so
//! sharing a client across tasks while reconfiguring it needs external
//! synchronization (e.g. a `Mutex`).

pub mod request;
pub mod transport;

use std::sync::Arc;

use oxr_types::{
    ClientConfig, Clock, Conversion, ConvertResponse, Currencies, DateInput, HttpTransport,
    OhlcRates, OhlcResponse, OxrError, QueryParams, Rates, RatesResponse, Symbols, SystemClock,
    TimeSeries, TimeSeriesResponse, Usage, UsageResponse, ValidationError, format_currencies,
    validate_currency_code, validate_date, validate_ohlc,
};

pub use request::{DEFAULT_BASE_URL, RequestClient};
pub use transport::ReqwestTransport;

/// Open Exchange Rates API client.
pub struct OpenExchangeRates<T = ReqwestTransport> {
    client: RequestClient<T>,
    config: ClientConfig,
    clock: Arc<dyn Clock>,
}

impl OpenExchangeRates<ReqwestTransport> {
    /// Creates a client with the default base currency (USD) and no alternative currencies.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(app_id))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> OpenExchangeRates<T> {
    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            client: RequestClient::new(config.app_id.clone(), transport),
            config,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(base_url);
        self
    }

    /// Replaces the source of "now" used for OHLC validation.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn set_base_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.config.base_currency = currency.into();
        self
    }

    /// Includes alternative, black market and digital currency rates.
    pub fn set_show_alternative(&mut self, show: bool) -> &mut Self {
        self.config.show_alternative = show;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// Lists all currencies.
    #[tracing::instrument(skip_all, fields(show_alternative = self.config.show_alternative))]
    pub async fn currencies(&self) -> Result<Currencies, OxrError> {
        let params = QueryParams::new().with("show_alternative", self.config.show_alternative);
        self.client.get_json("currencies.json", &params).await
    }

    /// Latest rates against the base currency, optionally limited to `symbols`.
    #[tracing::instrument(skip_all, fields(base = %self.config.base_currency))]
    pub async fn latest_rates(&self, symbols: impl Into<Symbols>) -> Result<Rates, OxrError> {
        let params = self.rate_params(symbols);
        let resp: RatesResponse = self.client.get_json("latest.json", &params).await?;
        Ok(resp.rates)
    }

    /// End-of-day rates for `date` (`YYYY-MM-DD` or a date value).
    #[tracing::instrument(skip_all, fields(base = %self.config.base_currency))]
    pub async fn historical_rates(
        &self,
        date: impl Into<DateInput>,
        symbols: impl Into<Symbols>,
    ) -> Result<Rates, OxrError> {
        let date = validate_date(date.into(), "historical")?;
        let params = self.rate_params(symbols);
        let resp: RatesResponse = self
            .client
            .get_json(&format!("historical/{date}.json"), &params)
            .await?;
        Ok(resp.rates)
    }

    /// Daily rates between `start` and `end`.
    #[tracing::instrument(skip_all, fields(base = %self.config.base_currency))]
    pub async fn time_series(
        &self,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
        symbols: impl Into<Symbols>,
    ) -> Result<TimeSeries, OxrError> {
        let start = validate_date(start.into(), "start")?;
        let end = validate_date(end.into(), "end")?;
        let mut params = QueryParams::new().with("start", start).with("end", end);
        params.extend(self.rate_params(symbols));
        let resp: TimeSeriesResponse = self.client.get_json("time-series.json", &params).await?;
        Ok(resp.rates)
    }

    /// Converts `amount` into `to`. `from` defaults to the base currency.
    #[tracing::instrument(skip(self))]
    pub async fn convert(
        &self,
        amount: f64,
        to: &str,
        from: Option<&str>,
    ) -> Result<Conversion, OxrError> {
        if !amount.is_finite() {
            return Err(ValidationError::InvalidAmount(amount).into());
        }
        let from = validate_currency_code(from.unwrap_or(self.config.base_currency.as_str()))?;
        let to = validate_currency_code(to)?;
        let resp: ConvertResponse = self
            .client
            .get_json(&format!("convert/{amount}/{from}/{to}"), &QueryParams::new())
            .await?;
        Ok(resp.into())
    }

    /// Open, high, low, close and average rates for one `period` starting at `start_time`.
    ///
    /// The window is checked against the provider's limits before anything is sent.
    #[tracing::instrument(skip_all, fields(period = period, base = %self.config.base_currency))]
    pub async fn ohlc_rates(
        &self,
        start_time: impl Into<DateInput>,
        period: &str,
        symbols: impl Into<Symbols>,
    ) -> Result<OhlcRates, OxrError> {
        let window = validate_ohlc(start_time.into(), period, self.clock.now())?;
        let mut params = QueryParams::new()
            .with("start_time", window.start_param())
            .with("period", window.period.code());
        params.extend(self.rate_params(symbols));
        let resp: OhlcResponse = self.client.get_json("ohlc.json", &params).await?;
        Ok(resp.rates)
    }

    /// Plan and request counters for this app id.
    #[tracing::instrument(skip_all)]
    pub async fn usage(&self) -> Result<Usage, OxrError> {
        let resp: UsageResponse = self
            .client
            .get_json("usage.json", &QueryParams::new())
            .await?;
        Ok(resp.data)
    }

    fn rate_params(&self, symbols: impl Into<Symbols>) -> QueryParams {
        let mut params = self.config.to_query_params();
        params.extend(format_currencies(symbols));
        params
    }
}
