use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_timestamp, datetime_to_timestamp};
use crate::core::{PointRecord, TimestampUnit};
use crate::error::{ChartError, ChartResult};

/// Sampling frequency of a regular time series, in observations per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Annual,
    Quarterly,
    Monthly,
}

impl Frequency {
    /// Maps observations-per-year onto a calendar frequency.
    ///
    /// Only frequencies with an unambiguous calendar date per index position
    /// are accepted.
    pub fn from_per_year(per_year: u32) -> ChartResult<Self> {
        match per_year {
            1 => Ok(Self::Annual),
            4 => Ok(Self::Quarterly),
            12 => Ok(Self::Monthly),
            other => Err(ChartError::InvalidArgument(format!(
                "unable to convert time series with frequency {other} to calendar dates"
            ))),
        }
    }

    #[must_use]
    pub fn per_year(self) -> u32 {
        match self {
            Self::Annual => 1,
            Self::Quarterly => 4,
            Self::Monthly => 12,
        }
    }

    fn months_per_period(self) -> u32 {
        12 / self.per_year()
    }
}

/// Regularly sampled series: values with an implicit time index.
///
/// `start_period` is 1-based within `start_year` (quarter or month number).
/// Deserialization goes through [`RegularTimeSeries::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegularTimeSeriesParts")]
pub struct RegularTimeSeries {
    start_year: i32,
    start_period: u32,
    frequency: Frequency,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RegularTimeSeriesParts {
    start_year: i32,
    start_period: u32,
    frequency: Frequency,
    values: Vec<f64>,
}

impl TryFrom<RegularTimeSeriesParts> for RegularTimeSeries {
    type Error = ChartError;

    fn try_from(parts: RegularTimeSeriesParts) -> ChartResult<Self> {
        Self::new(
            parts.start_year,
            parts.start_period,
            parts.frequency,
            parts.values,
        )
    }
}

impl RegularTimeSeries {
    pub fn new(
        start_year: i32,
        start_period: u32,
        frequency: Frequency,
        values: Vec<f64>,
    ) -> ChartResult<Self> {
        if start_period == 0 || start_period > frequency.per_year() {
            return Err(ChartError::InvalidData(format!(
                "start period must be within 1..={}",
                frequency.per_year()
            )));
        }

        Ok(Self {
            start_year,
            start_period,
            frequency,
            values,
        })
    }

    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    #[must_use]
    pub fn start_period(&self) -> u32 {
        self.start_period
    }

    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Calendar date of each index position: January 1st for annual data, the
    /// first day of the quarter's first month, or the first of the month.
    pub fn dates(&self) -> ChartResult<Vec<NaiveDate>> {
        let per_year = i64::from(self.frequency.per_year());
        let first = self
            .start_period
            .checked_sub(1)
            .map(i64::from)
            .ok_or_else(|| ChartError::InvalidData("start period must be >= 1".to_owned()))?;

        (0..self.values.len() as i64)
            .map(|offset| {
                let position = first + offset;
                let year = i64::from(self.start_year) + position.div_euclid(per_year);
                let period = position.rem_euclid(per_year) as u32;
                let month = period * self.frequency.months_per_period() + 1;
                i32::try_from(year)
                    .ok()
                    .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
                    .ok_or_else(|| {
                        ChartError::InvalidData(format!(
                            "time index {year}-{month:02} is out of calendar range"
                        ))
                    })
            })
            .collect()
    }

    pub fn timestamps(&self, unit: TimestampUnit) -> ChartResult<Vec<f64>> {
        Ok(self
            .dates()?
            .into_iter()
            .map(|date| date_to_timestamp(date, unit))
            .collect())
    }

    /// Pairs each derived timestamp with its value.
    pub fn to_points(&self, unit: TimestampUnit) -> ChartResult<Vec<PointRecord>> {
        let timestamps = self.timestamps(unit)?;
        Ok(timestamps
            .into_iter()
            .zip(&self.values)
            .map(|(t, v)| PointRecord::pair(t, *v))
            .collect())
    }
}

/// Named numeric column of an irregular series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Series with an explicit timestamp per observation and one or more columns.
///
/// Invariant: every column is as long as the index. Deserialization goes
/// through [`IrregularTimeSeries::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IrregularTimeSeriesParts")]
pub struct IrregularTimeSeries {
    index: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

#[derive(Deserialize)]
struct IrregularTimeSeriesParts {
    index: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

impl TryFrom<IrregularTimeSeriesParts> for IrregularTimeSeries {
    type Error = ChartError;

    fn try_from(parts: IrregularTimeSeriesParts) -> ChartResult<Self> {
        Self::new(parts.index, parts.columns)
    }
}

impl IrregularTimeSeries {
    pub fn new(index: Vec<DateTime<Utc>>, columns: Vec<Column>) -> ChartResult<Self> {
        if columns.is_empty() {
            return Err(ChartError::InvalidData(
                "irregular time series needs at least one column".to_owned(),
            ));
        }
        for column in &columns {
            if column.values.len() != index.len() {
                return Err(ChartError::InvalidData(format!(
                    "column `{}` has {} observations, index has {}",
                    column.name,
                    column.values.len(),
                    index.len()
                )));
            }
        }

        Ok(Self { index, columns })
    }

    /// Single-column convenience constructor.
    pub fn univariate(
        index: Vec<DateTime<Utc>>,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> ChartResult<Self> {
        Self::new(index, vec![Column::new(name, values)])
    }

    #[must_use]
    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Finds the first column whose name contains `needle`, ignoring case.
    #[must_use]
    pub fn find_column(&self, needle: &str) -> Option<&Column> {
        let needle = needle.to_ascii_lowercase();
        self.columns
            .iter()
            .find(|c| c.name.to_ascii_lowercase().contains(&needle))
    }

    /// Returns `true` when open, high, low and close columns are all present.
    #[must_use]
    pub fn is_ohlc(&self) -> bool {
        ["open", "high", "low", "close"]
            .iter()
            .all(|needle| self.find_column(needle).is_some())
    }

    /// Pairs each index timestamp with the value of the single column.
    pub fn to_points(&self, unit: TimestampUnit) -> ChartResult<Vec<PointRecord>> {
        let [column] = self.columns.as_slice() else {
            return Err(ChartError::InvalidArgument(format!(
                "irregular time series with {} columns is not univariate and not OHLC",
                self.columns.len()
            )));
        };

        Ok(self
            .index
            .iter()
            .zip(&column.values)
            .map(|(time, value)| PointRecord::pair(datetime_to_timestamp(*time, unit), *value))
            .collect())
    }
}
