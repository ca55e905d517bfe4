use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Epoch unit written into the first field of time-indexed point records.
///
/// The front-end expects milliseconds; seconds are available for consumers
/// that post-process the document themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampUnit {
    #[default]
    Milliseconds,
    Seconds,
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_timestamp(time: DateTime<Utc>, unit: TimestampUnit) -> f64 {
    let millis = time.timestamp_millis() as f64;
    match unit {
        TimestampUnit::Milliseconds => millis,
        TimestampUnit::Seconds => millis / 1000.0,
    }
}

/// Converts a calendar date (midnight UTC) into an epoch timestamp.
#[must_use]
pub fn date_to_timestamp(date: NaiveDate, unit: TimestampUnit) -> f64 {
    datetime_to_timestamp(date.and_time(chrono::NaiveTime::MIN).and_utc(), unit)
}
