//! Response bodies returned by the provider.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Currency code -> rate against the base currency.
pub type Rates = BTreeMap<String, f64>;

/// Currency code -> full currency name.
pub type Currencies = BTreeMap<String, String>;

/// Day -> rates for that day.
pub type TimeSeries = BTreeMap<NaiveDate, Rates>;

/// Currency code -> OHLC summary.
pub type OhlcRates = BTreeMap<String, OhlcRate>;

// ─────────────────────────────────────────────────────────────────────────────
// Rate DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `latest.json` and `historical/*.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    #[serde(default)]
    pub rates: Rates,
}

/// Body of `time-series.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesResponse {
    pub rates: TimeSeries,
}

/// Body of `ohlc.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhlcResponse {
    pub rates: OhlcRates,
}

/// Open, high, low, close and average rate over one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcRate {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub average: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `convert/{amount}/{from}/{to}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub meta: ConvertMeta,
    pub response: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertMeta {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    pub rate: f64,
}

/// Result of a conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// When the rate used was published
    pub converted_at: DateTime<Utc>,
    pub rate: f64,
    /// Converted amount in the target currency
    pub value: f64,
}

impl From<ConvertResponse> for Conversion {
    fn from(resp: ConvertResponse) -> Self {
        Self {
            converted_at: resp.meta.timestamp,
            rate: resp.meta.rate,
            value: resp.response,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Usage DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `usage.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageResponse {
    pub data: Usage,
}

/// Plan and request counters for the app id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub app_id: String,
    pub status: String,
    pub plan: Plan,
    pub usage: UsageCounters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub quota: String,
    pub update_frequency: String,
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageCounters {
    pub requests: i64,
    pub requests_quota: i64,
    pub requests_remaining: i64,
    pub days_elapsed: i64,
    pub days_remaining: i64,
    pub daily_average: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Error DTO
// ─────────────────────────────────────────────────────────────────────────────

/// Error body sent alongside a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_response_maps_to_conversion() {
        let body = r#"{
            "disclaimer": "https://openexchangerates.org/terms/",
            "request": {"query": "/convert/19999.95/GBP/EUR", "amount": 19999.95, "from": "GBP", "to": "EUR"},
            "meta": {"timestamp": 1449885661, "rate": 1.383702},
            "response": 27673.975864
        }"#;
        let resp: ConvertResponse = serde_json::from_str(body).unwrap();
        let conversion = Conversion::from(resp);
        assert_eq!(conversion.converted_at.timestamp(), 1449885661);
        assert_eq!(conversion.rate, 1.383702);
        assert_eq!(conversion.value, 27673.975864);
    }

    #[test]
    fn test_rates_default_to_empty() {
        let resp: RatesResponse = serde_json::from_str(r#"{"base": "USD"}"#).unwrap();
        assert!(resp.rates.is_empty());
    }

    #[test]
    fn test_time_series_keys_are_dates() {
        let body = r#"{"rates": {"2013-01-01": {"GBP": 0.615}, "2013-01-02": {"GBP": 0.618}}}"#;
        let resp: TimeSeriesResponse = serde_json::from_str(body).unwrap();
        let first = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
        assert_eq!(resp.rates[&first]["GBP"], 0.615);
        assert_eq!(resp.rates.len(), 2);
    }

    #[test]
    fn test_usage_response() {
        let body = r#"{
            "status": 200,
            "data": {
                "app_id": "abc",
                "status": "active",
                "plan": {
                    "name": "Enterprise",
                    "quota": "100,000 requests per month",
                    "update_frequency": "30-minute",
                    "features": {"base": true, "symbols": true, "time-series": true, "convert": false}
                },
                "usage": {
                    "requests": 54524, "requests_quota": 100000, "requests_remaining": 45476,
                    "days_elapsed": 16, "days_remaining": 14, "daily_average": 3407
                }
            }
        }"#;
        let resp: UsageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data.plan.name, "Enterprise");
        assert_eq!(resp.data.plan.features.get("convert"), Some(&false));
        assert_eq!(resp.data.usage.requests_remaining, 45476);
    }
}
