//! Error types for the exchange rate SDK.

use crate::domain::Period;

/// A caller-supplied argument broke one of the provider's rules.
///
/// Always raised before any request is sent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is not a valid start time. Format must be YYYY-MM-DDThh:mm:00Z")]
    InvalidStartTime(String),

    #[error("{value} is not a valid {field} date. Valid format is YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Start time must always have zero seconds (i.e. hh:mm:00)")]
    NonZeroSeconds,

    #[error("Start date must be on or after December 19th 2016")]
    BeforeEpoch,

    #[error(
        "{0} is not a valid time period. Allowed periods are: 1m, 5m, 15m, 30m, 1h, 12h, 1d, 1w, and 1mo"
    )]
    UnknownPeriod(String),

    #[error(
        "Start date cannot be older than {} ago when using a time period of {}",
        .period.lookback_label(),
        .period.label()
    )]
    LookbackExceeded { period: Period },

    #[error(
        "Start time minutes must be aligned to {alignment} minutes when using a time period of {}",
        .period.label()
    )]
    Misaligned { period: Period, alignment: u32 },

    #[error(
        "Start date must be aligned to the start of a calendar day (i.e. 00:00) when using a time period of 1 week"
    )]
    NotStartOfDay,

    #[error(
        "Start date must be aligned to the start of the calendar month (i.e. YYYY-MM-01) when using a time period of 1 month"
    )]
    NotStartOfMonth,

    #[error(
        "The combination of start time and a time period of {} must not produce an end time in the future (i.e. an incomplete period)",
        .period.label()
    )]
    IncompletePeriod { period: Period },

    #[error("{0} is not a valid amount to convert")]
    InvalidAmount(f64),

    #[error("{0:?} is not a valid currency code")]
    InvalidCurrency(String),
}

/// Failure inside the HTTP transport (DNS, refused connection, timeout, ...).
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(err.into())
    }
}

/// Top-level error returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum OxrError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] TransportError),

    #[error("Received HTTP status [{status} {message}] with error \"{description}\"")]
    Api {
        status: u16,
        message: String,
        description: String,
    },
}

impl OxrError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            OxrError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
