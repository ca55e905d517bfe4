use serde::{Deserialize, Serialize};

use crate::core::TimestampUnit;
use crate::error::{ChartError, ChartResult};

/// Adapter bootstrap configuration.
///
/// This type is serializable so host applications can keep adapter settings
/// next to the rest of their chart setup. Missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Emits a `debug` event naming the conversion branch taken per call.
    pub verbose: bool,
    pub timestamp_unit: TimestampUnit,
    /// Duplicates the only point of a length-1 numeric series.
    pub pad_single_point_numeric: bool,
    /// Band opacity for forecast intervals when the caller sets none.
    pub forecast_fill_opacity: f64,
    pub forecast_band_z_index: i32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            timestamp_unit: TimestampUnit::Milliseconds,
            pad_single_point_numeric: true,
            forecast_fill_opacity: 0.1,
            forecast_band_z_index: -1,
        }
    }
}

impl AdapterConfig {
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_timestamp_unit(mut self, unit: TimestampUnit) -> Self {
        self.timestamp_unit = unit;
        self
    }

    #[must_use]
    pub fn with_forecast_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.forecast_fill_opacity = fill_opacity;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.forecast_fill_opacity.is_finite()
            || !(0.0..=1.0).contains(&self.forecast_fill_opacity)
        {
            return Err(ChartError::InvalidArgument(
                "forecast fill opacity must be within [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidArgument(format!("failed to parse adapter config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize adapter config: {e}"))
        })
    }
}
