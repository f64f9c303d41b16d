//! # OXR Types
//!
//! Domain types and port traits for the Open Exchange Rates client SDK.
//! This crate has ZERO IO - only data structures, validation rules,
//! and trait definitions.
//!
//! ## Layout
//!
//! - `domain/` - Periods, date validation, query parameters, configuration
//! - `ports/` - Trait definitions the client adapters implement
//! - `dto/` - Typed response bodies returned by the provider
//! - `error/` - Validation, network and API error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ClientConfig, DATA_EPOCH, DateInput, OhlcWindow, ParamValue, Period, QueryParams, Symbols,
    format_currencies, validate_currency_code, validate_date, validate_ohlc,
};
pub use dto::*;
pub use error::{OxrError, TransportError, ValidationError};
pub use ports::{Clock, FixedClock, HttpResponse, HttpTransport, SystemClock};
