//! Domain models for the exchange rate client.

pub mod config;
pub mod dates;
pub mod params;
pub mod period;

pub use config::{ClientConfig, DEFAULT_BASE_CURRENCY};
pub use dates::{DATA_EPOCH, DateInput, OhlcWindow, validate_date, validate_ohlc};
pub use params::{ParamValue, QueryParams, Symbols, format_currencies, validate_currency_code};
pub use period::Period;
