use serde::{Deserialize, Serialize};

use crate::core::{PointRecord, RegularTimeSeries, TimestampUnit};
use crate::error::{ChartError, ChartResult};

/// Prediction interval around the point forecast at one confidence level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInterval {
    /// Confidence level in percent, e.g. `80.0` or `95.0`.
    pub level: f64,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

impl PredictionInterval {
    #[must_use]
    pub fn new(level: f64, upper: Vec<f64>, lower: Vec<f64>) -> Self {
        Self {
            level,
            upper,
            lower,
        }
    }
}

/// Result of a forecasting model: the observed series, the point forecasts
/// and one interval band per confidence level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub method: String,
    pub observed: RegularTimeSeries,
    pub mean: RegularTimeSeries,
    pub intervals: Vec<PredictionInterval>,
}

impl Forecast {
    pub fn new(
        method: impl Into<String>,
        observed: RegularTimeSeries,
        mean: RegularTimeSeries,
        intervals: Vec<PredictionInterval>,
    ) -> ChartResult<Self> {
        let forecast = Self {
            method: method.into(),
            observed,
            mean,
            intervals,
        };
        forecast.validate()?;
        Ok(forecast)
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        let horizon = self.mean.len();
        for interval in &self.intervals {
            if !interval.level.is_finite() || interval.level <= 0.0 || interval.level >= 100.0 {
                return Err(ChartError::InvalidData(format!(
                    "forecast interval level must be within (0, 100), got {}",
                    interval.level
                )));
            }
            if interval.upper.len() != horizon || interval.lower.len() != horizon {
                return Err(ChartError::InvalidData(format!(
                    "forecast interval at level {} must have {horizon} upper and lower bounds",
                    interval.level
                )));
            }
        }
        Ok(())
    }

    /// Band name for one level: `"{series} level {level}"`.
    #[must_use]
    pub fn band_name(series_name: &str, level: f64) -> String {
        format!("{series_name} level {level}")
    }

    /// `[timestamp, upper, lower]` tuples for one interval, indexed like the
    /// point forecasts.
    pub fn band_points(
        &self,
        interval: &PredictionInterval,
        unit: TimestampUnit,
    ) -> ChartResult<Vec<PointRecord>> {
        let timestamps = self.mean.timestamps(unit)?;
        Ok(timestamps
            .into_iter()
            .zip(interval.upper.iter().zip(&interval.lower))
            .map(|(t, (upper, lower))| PointRecord::tuple([t, *upper, *lower]))
            .collect())
    }
}
