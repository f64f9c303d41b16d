//! OHLC time periods and their provider-specific limits.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Bucket size for an OHLC query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "12h")]
    TwelveHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1mo")]
    OneMonth,
}

impl Period {
    pub fn all() -> &'static [Period] {
        &[
            Period::OneMinute,
            Period::FiveMinutes,
            Period::FifteenMinutes,
            Period::ThirtyMinutes,
            Period::OneHour,
            Period::TwelveHours,
            Period::OneDay,
            Period::OneWeek,
            Period::OneMonth,
        ]
    }

    /// Wire code sent as the `period` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Period::OneMinute => "1m",
            Period::FiveMinutes => "5m",
            Period::FifteenMinutes => "15m",
            Period::ThirtyMinutes => "30m",
            Period::OneHour => "1h",
            Period::TwelveHours => "12h",
            Period::OneDay => "1d",
            Period::OneWeek => "1w",
            Period::OneMonth => "1mo",
        }
    }

    /// Human-readable bucket size used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Period::OneMinute => "1 minute",
            Period::FiveMinutes => "5 minutes",
            Period::FifteenMinutes => "15 minutes",
            Period::ThirtyMinutes => "30 minutes",
            Period::OneHour => "1 hour",
            Period::TwelveHours => "12 hours",
            Period::OneDay => "1 day",
            Period::OneWeek => "1 week",
            Period::OneMonth => "1 month",
        }
    }

    /// How far back a start time may lie, or `None` when unlimited.
    pub fn lookback(&self) -> Option<Duration> {
        match self {
            Period::OneMinute => Some(Duration::hours(1)),
            Period::FiveMinutes | Period::FifteenMinutes => Some(Duration::days(1)),
            Period::ThirtyMinutes | Period::OneHour => Some(Duration::days(32)),
            Period::TwelveHours | Period::OneDay | Period::OneWeek | Period::OneMonth => None,
        }
    }

    pub fn lookback_label(&self) -> &'static str {
        match self {
            Period::OneMinute => "1 hour",
            Period::FiveMinutes | Period::FifteenMinutes => "1 day",
            Period::ThirtyMinutes | Period::OneHour => "32 days",
            Period::TwelveHours | Period::OneDay | Period::OneWeek | Period::OneMonth => {
                "any time"
            }
        }
    }

    /// Divisor the start minute must honour, if any.
    pub fn alignment(&self) -> Option<u32> {
        match self {
            Period::OneMinute | Period::OneWeek | Period::OneMonth => None,
            Period::FiveMinutes => Some(5),
            Period::FifteenMinutes => Some(15),
            Period::ThirtyMinutes | Period::OneHour | Period::TwelveHours | Period::OneDay => {
                Some(30)
            }
        }
    }

    /// End of the bucket starting at `start`.
    ///
    /// Returns `None` only if the month arithmetic overflows chrono's range.
    pub fn end_from(&self, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let step = match self {
            Period::OneMinute => Duration::minutes(1),
            Period::FiveMinutes => Duration::minutes(5),
            Period::FifteenMinutes => Duration::minutes(15),
            Period::ThirtyMinutes => Duration::minutes(30),
            Period::OneHour => Duration::hours(1),
            Period::TwelveHours => Duration::hours(12),
            Period::OneDay => Duration::days(1),
            Period::OneWeek => Duration::weeks(1),
            Period::OneMonth => return start.checked_add_months(Months::new(1)),
        };
        start.checked_add_signed(step)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::all()
            .iter()
            .copied()
            .find(|p| p.code() == s)
            .ok_or_else(|| ValidationError::UnknownPeriod(s.to_string()))
    }
}
