use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_timestamp, decimal_to_f64};
use crate::core::{IrregularTimeSeries, PointRecord, Scalar, TimestampUnit};
use crate::error::{ChartError, ChartResult};

/// One OHLC observation, optionally with traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
}

impl OhlcBar {
    /// Builds a validated OHLC bar from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(
        time: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
            volume: None,
        })
    }

    /// Converts decimal prices into a validated OHLC bar.
    pub fn from_decimal(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            time,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    pub fn with_volume(mut self, volume: f64) -> ChartResult<Self> {
        if !volume.is_finite() || volume < 0.0 {
            return Err(ChartError::InvalidData(
                "ohlc volume must be finite and >= 0".to_owned(),
            ));
        }
        self.volume = Some(volume);
        Ok(self)
    }

    fn to_point(self, unit: TimestampUnit) -> PointRecord {
        let mut values = vec![
            Scalar::number(datetime_to_timestamp(self.time, unit)),
            Scalar::number(self.open),
            Scalar::number(self.high),
            Scalar::number(self.low),
            Scalar::number(self.close),
        ];
        if let Some(volume) = self.volume {
            values.push(Scalar::number(volume));
        }
        PointRecord::tuple(values)
    }
}

/// OHLC frame: bars plus the source column names (e.g. `AAPL.Open`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcSeries {
    pub columns: Vec<String>,
    pub bars: Vec<OhlcBar>,
}

impl OhlcSeries {
    #[must_use]
    pub fn new(columns: Vec<String>, bars: Vec<OhlcBar>) -> Self {
        Self { columns, bars }
    }

    /// Extracts open/high/low/close (and volume when present) from a
    /// multi-column irregular series. Missing observations stay as `NaN` and
    /// are written as nulls.
    pub fn from_irregular(series: &IrregularTimeSeries) -> ChartResult<Self> {
        let pick = |needle: &str| {
            series.find_column(needle).ok_or_else(|| {
                ChartError::InvalidData(format!("ohlc series is missing a `{needle}` column"))
            })
        };
        let open = pick("open")?;
        let high = pick("high")?;
        let low = pick("low")?;
        let close = pick("close")?;
        let volume = series.find_column("volume");

        let bars = series
            .index()
            .iter()
            .enumerate()
            .map(|(i, time)| OhlcBar {
                time: *time,
                open: open.values[i],
                high: high.values[i],
                low: low.values[i],
                close: close.values[i],
                volume: volume.map(|v| v.values[i]),
            })
            .collect();

        Ok(Self {
            columns: series
                .column_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            bars,
        })
    }

    /// Leading alphabetic prefix of the first column name: `AAPL.Open` -> `AAPL`.
    #[must_use]
    pub fn default_name(&self) -> Option<String> {
        let first = self.columns.first()?;
        let prefix: String = first
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .collect();
        (!prefix.is_empty()).then_some(prefix)
    }

    #[must_use]
    pub fn to_points(&self, unit: TimestampUnit) -> Vec<PointRecord> {
        self.bars.iter().map(|bar| bar.to_point(unit)).collect()
    }
}
