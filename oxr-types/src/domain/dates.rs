//! Date and start-time validation for historical, time-series and OHLC requests.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use super::Period;
use crate::error::ValidationError;

/// Unix timestamp of 2016-12-19T00:00:00Z, the earliest OHLC data the provider holds.
pub const DATA_EPOCH: i64 = 1_482_105_600;

const DATE_FORMAT: &str = "%Y-%m-%d";
const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A date argument as accepted by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Text(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::DateTime(dt)
    }
}

/// Validates a historical or time-series date and renders it as `YYYY-MM-DD`.
///
/// `field` names the argument in the error message ("historical", "start", "end").
pub fn validate_date(input: DateInput, field: &'static str) -> Result<String, ValidationError> {
    let date = match input {
        DateInput::Text(s) => parse_strict_date(&s).ok_or(ValidationError::InvalidDate {
            field,
            value: s,
        })?,
        DateInput::Date(d) => d,
        DateInput::DateTime(dt) => dt.date_naive(),
    };
    // chrono renders years outside 0..=9999 with a sign or extra digits.
    if !(0..=9999).contains(&date.year()) {
        return Err(ValidationError::InvalidDate {
            field,
            value: date.to_string(),
        });
    }
    Ok(date.format(DATE_FORMAT).to_string())
}

/// A validated OHLC request window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OhlcWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub period: Period,
}

impl OhlcWindow {
    /// Start time in the `YYYY-MM-DDThh:mm:00Z` shape the provider expects.
    pub fn start_param(&self) -> String {
        self.start.format(START_TIME_FORMAT).to_string()
    }
}

/// Checks an OHLC start time and period against the provider's restrictions.
///
/// `now` is the reference instant for look-back and completeness checks.
pub fn validate_ohlc(
    start_time: DateInput,
    period: &str,
    now: DateTime<Utc>,
) -> Result<OhlcWindow, ValidationError> {
    let start = match start_time {
        DateInput::Text(s) => parse_strict_start_time(&s)
            .ok_or(ValidationError::InvalidStartTime(s))?,
        DateInput::Date(d) => d.and_time(NaiveTime::MIN).and_utc(),
        DateInput::DateTime(dt) => dt,
    };

    if start.second() != 0 || start.nanosecond() != 0 {
        return Err(ValidationError::NonZeroSeconds);
    }
    if start.timestamp() < DATA_EPOCH {
        return Err(ValidationError::BeforeEpoch);
    }

    let period: Period = period.parse()?;

    if let Some(limit) = period.lookback() {
        if start < now - limit {
            return Err(ValidationError::LookbackExceeded { period });
        }
    }
    if let Some(alignment) = period.alignment() {
        if start.minute() % alignment != 0 {
            return Err(ValidationError::Misaligned { period, alignment });
        }
    }
    match period {
        Period::OneWeek if start.hour() != 0 || start.minute() != 0 => {
            return Err(ValidationError::NotStartOfDay);
        }
        Period::OneMonth if start.day() != 1 => {
            return Err(ValidationError::NotStartOfMonth);
        }
        _ => {}
    }

    let end = period
        .end_from(start)
        .ok_or(ValidationError::IncompletePeriod { period })?;
    if end > now {
        return Err(ValidationError::IncompletePeriod { period });
    }

    Ok(OhlcWindow { start, end, period })
}

// chrono accepts unpadded fields, so the parsed value must format back to the input.
fn parse_strict_date(s: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == s).then_some(date)
}

fn parse_strict_start_time(s: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s, START_TIME_FORMAT).ok()?;
    (naive.format(START_TIME_FORMAT).to_string() == s).then(|| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, START_TIME_FORMAT)
            .unwrap()
            .and_utc()
    }

    fn now() -> DateTime<Utc> {
        at("2023-06-01T11:00:00Z")
    }

    #[test]
    fn test_data_epoch_constant() {
        let epoch = Utc.with_ymd_and_hms(2016, 12, 19, 0, 0, 0).unwrap();
        assert_eq!(epoch.timestamp(), DATA_EPOCH);
    }

    #[test]
    fn test_valid_five_minute_window() {
        let window = validate_ohlc("2023-06-01T10:30:00Z".into(), "5m", now()).unwrap();
        assert_eq!(window.start, at("2023-06-01T10:30:00Z"));
        assert_eq!(window.end, at("2023-06-01T10:35:00Z"));
        assert_eq!(window.period, Period::FiveMinutes);
        assert_eq!(window.start_param(), "2023-06-01T10:30:00Z");
    }

    #[test]
    fn test_misaligned_five_minutes() {
        let err = validate_ohlc("2023-06-01T10:31:00Z".into(), "5m", now()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Misaligned {
                period: Period::FiveMinutes,
                alignment: 5
            }
        );
    }

    #[test]
    fn test_before_epoch() {
        let err = validate_ohlc("2016-01-01T00:00:00Z".into(), "1d", now()).unwrap_err();
        assert_eq!(err, ValidationError::BeforeEpoch);
    }

    #[test]
    fn test_epoch_day_itself_is_allowed() {
        assert!(validate_ohlc("2016-12-19T00:00:00Z".into(), "1d", now()).is_ok());
    }

    #[test]
    fn test_invalid_start_time_format() {
        for bad in [
            "2023-06-01 10:30:00",
            "2023-06-01T10:30Z",
            "2023-6-01T10:30:00Z",
            "2023-06-01T10:30:00+00:00",
            "yesterday",
        ] {
            let err = validate_ohlc(bad.into(), "5m", now()).unwrap_err();
            assert_eq!(err, ValidationError::InvalidStartTime(bad.to_string()));
        }
    }

    #[test]
    fn test_non_zero_seconds() {
        let err = validate_ohlc("2023-06-01T10:30:15Z".into(), "5m", now()).unwrap_err();
        assert_eq!(err, ValidationError::NonZeroSeconds);

        let dt = Utc.with_ymd_and_hms(2023, 6, 1, 10, 30, 1).unwrap();
        let err = validate_ohlc(dt.into(), "5m", now()).unwrap_err();
        assert_eq!(err, ValidationError::NonZeroSeconds);
    }

    #[test]
    fn test_unknown_period() {
        let err = validate_ohlc("2023-06-01T10:30:00Z".into(), "3m", now()).unwrap_err();
        assert_eq!(err, ValidationError::UnknownPeriod("3m".into()));
    }

    #[test]
    fn test_datetime_input_accepted_as_is() {
        let dt = at("2023-06-01T10:00:00Z");
        let window = validate_ohlc(dt.into(), "1h", now()).unwrap();
        assert_eq!(window.start, dt);
    }

    #[test]
    fn test_incomplete_period_for_every_period() {
        // Start exactly "now" so every bucket ends in the future.
        let now = at("2023-05-01T00:00:00Z");
        for period in Period::all() {
            let err = validate_ohlc(now.into(), period.code(), now).unwrap_err();
            assert_eq!(err, ValidationError::IncompletePeriod { period: *period });
        }
    }

    #[test]
    fn test_end_equal_to_now_is_complete() {
        let ok = validate_ohlc("2023-06-01T10:59:00Z".into(), "1m", now());
        assert!(ok.is_ok());
    }

    #[test]
    fn test_alignment_rules() {
        let now = at("2023-06-02T10:30:00Z");
        for period in Period::all() {
            let Some(alignment) = period.alignment() else {
                continue;
            };
            let misaligned = at("2023-06-01T10:37:00Z");
            let err = validate_ohlc(misaligned.into(), period.code(), now).unwrap_err();
            assert_eq!(
                err,
                ValidationError::Misaligned {
                    period: *period,
                    alignment
                }
            );

            let aligned = at("2023-06-01T10:30:00Z");
            assert!(
                validate_ohlc(aligned.into(), period.code(), now).is_ok(),
                "{period} should accept minute 30"
            );
        }
    }

    #[test]
    fn test_lookback_limits() {
        let now = at("2023-06-10T12:00:00Z");
        let cases = [
            ("1m", "2023-06-10T10:59:00Z"),
            ("5m", "2023-06-09T11:55:00Z"),
            ("15m", "2023-06-09T11:45:00Z"),
            ("30m", "2023-05-09T11:30:00Z"),
            ("1h", "2023-05-09T11:00:00Z"),
        ];
        for (code, start) in cases {
            let err = validate_ohlc(start.into(), code, now).unwrap_err();
            assert!(
                matches!(err, ValidationError::LookbackExceeded { .. }),
                "{code}: {err}"
            );
        }
        assert!(validate_ohlc("2023-06-10T11:00:00Z".into(), "1m", now).is_ok());
        assert!(validate_ohlc("2023-05-10T12:00:00Z".into(), "1h", now).is_ok());
    }

    #[test]
    fn test_unlimited_lookback_periods() {
        let now = at("2023-06-10T12:00:00Z");
        assert!(validate_ohlc("2017-01-02T00:00:00Z".into(), "12h", now).is_ok());
        assert!(validate_ohlc("2017-01-02T00:30:00Z".into(), "1d", now).is_ok());
    }

    #[test]
    fn test_week_must_start_at_midnight() {
        let now = at("2023-06-30T00:00:00Z");
        let err = validate_ohlc("2023-06-01T00:30:00Z".into(), "1w", now).unwrap_err();
        assert_eq!(err, ValidationError::NotStartOfDay);
        let err = validate_ohlc("2023-06-01T01:00:00Z".into(), "1w", now).unwrap_err();
        assert_eq!(err, ValidationError::NotStartOfDay);
        assert!(validate_ohlc("2023-06-01T00:00:00Z".into(), "1w", now).is_ok());
    }

    #[test]
    fn test_month_must_start_on_first() {
        let now = at("2023-08-15T00:00:00Z");
        let err = validate_ohlc("2023-06-02T00:00:00Z".into(), "1mo", now).unwrap_err();
        assert_eq!(err, ValidationError::NotStartOfMonth);
        assert!(validate_ohlc("2023-06-01T00:00:00Z".into(), "1mo", now).is_ok());
        // August is not over yet.
        let err = validate_ohlc("2023-08-01T00:00:00Z".into(), "1mo", now).unwrap_err();
        assert!(matches!(err, ValidationError::IncompletePeriod { .. }));
    }

    #[test]
    fn test_naive_date_is_midnight() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        let window = validate_ohlc(date.into(), "1mo", now()).unwrap();
        assert_eq!(window.start_param(), "2023-05-01T00:00:00Z");
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2023-06-01".into(), "historical").unwrap(),
            "2023-06-01"
        );
        let dt = at("2023-06-01T10:30:00Z");
        assert_eq!(validate_date(dt.into(), "start").unwrap(), "2023-06-01");
        let d = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(validate_date(d.into(), "end").unwrap(), "2020-02-29");
    }

    #[test]
    fn test_validate_date_rejects_other_shapes() {
        for bad in ["2023-6-1", "2023/06/01", "2023-02-30", "2023-06-01T00:00:00Z", ""] {
            let err = validate_date(bad.into(), "start").unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidDate {
                    field: "start",
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn test_validate_date_rejects_years_outside_four_digits() {
        let far = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        assert!(matches!(
            validate_date(far.into(), "historical"),
            Err(ValidationError::InvalidDate { field: "historical", .. })
        ));
        let bce = NaiveDate::from_ymd_opt(-1, 12, 31).unwrap();
        assert!(matches!(
            validate_date(bce.into(), "start"),
            Err(ValidationError::InvalidDate { field: "start", .. })
        ));
        let edge = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert_eq!(validate_date(edge.into(), "end").unwrap(), "9999-12-31");
    }
}
