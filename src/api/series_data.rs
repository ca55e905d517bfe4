use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    Categorical, Density, Forecast, IrregularTimeSeries, OhlcSeries, PointRecord,
    RegularTimeSeries, Table,
};

/// Forecast-specific switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastOptions {
    /// Also appends the observed series the model was fitted on.
    pub add_original: bool,
    /// Appends one interval band per confidence level.
    pub add_levels: bool,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            add_original: false,
            add_levels: true,
        }
    }
}

impl ForecastOptions {
    #[must_use]
    pub fn with_original(mut self, add_original: bool) -> Self {
        self.add_original = add_original;
        self
    }

    #[must_use]
    pub fn with_levels(mut self, add_levels: bool) -> Self {
        self.add_levels = add_levels;
        self
    }
}

/// Mapping from point fields (`x`, `y`, `name`, ...) to table column names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldMapping(IndexMap<String, String>);

impl FieldMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.0.insert(field.into(), column.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Input shapes the series adapter knows how to convert.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    /// Points used verbatim.
    Literal(Vec<PointRecord>),
    Numeric(Vec<f64>),
    TimeSeries(RegularTimeSeries),
    Irregular(IrregularTimeSeries),
    Ohlc(OhlcSeries),
    Forecast {
        forecast: Forecast,
        options: ForecastOptions,
    },
    Density(Density),
    Categorical(Categorical),
    Tabular {
        table: Table,
        mapping: FieldMapping,
    },
}

impl SeriesData {
    #[must_use]
    pub fn kind(&self) -> SeriesDataKind {
        match self {
            Self::Literal(_) => SeriesDataKind::Literal,
            Self::Numeric(_) => SeriesDataKind::Numeric,
            Self::TimeSeries(_) => SeriesDataKind::TimeSeries,
            Self::Irregular(_) => SeriesDataKind::Irregular,
            Self::Ohlc(_) => SeriesDataKind::Ohlc,
            Self::Forecast { .. } => SeriesDataKind::Forecast,
            Self::Density(_) => SeriesDataKind::Density,
            Self::Categorical(_) => SeriesDataKind::Categorical,
            Self::Tabular { .. } => SeriesDataKind::Tabular,
        }
    }

    #[must_use]
    pub fn forecast(forecast: Forecast, options: ForecastOptions) -> Self {
        Self::Forecast { forecast, options }
    }

    #[must_use]
    pub fn tabular(table: Table, mapping: FieldMapping) -> Self {
        Self::Tabular { table, mapping }
    }
}

/// Conversion branch tag, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesDataKind {
    Literal,
    Numeric,
    TimeSeries,
    Irregular,
    Ohlc,
    Forecast,
    Density,
    Categorical,
    Tabular,
}

impl SeriesDataKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Numeric => "numeric",
            Self::TimeSeries => "time_series",
            Self::Irregular => "irregular_time_series",
            Self::Ohlc => "ohlc",
            Self::Forecast => "forecast",
            Self::Density => "density",
            Self::Categorical => "categorical",
            Self::Tabular => "tabular",
        }
    }
}

impl fmt::Display for SeriesDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Vec<PointRecord>> for SeriesData {
    fn from(points: Vec<PointRecord>) -> Self {
        Self::Literal(points)
    }
}

impl From<Vec<f64>> for SeriesData {
    fn from(values: Vec<f64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<RegularTimeSeries> for SeriesData {
    fn from(series: RegularTimeSeries) -> Self {
        Self::TimeSeries(series)
    }
}

impl From<IrregularTimeSeries> for SeriesData {
    fn from(series: IrregularTimeSeries) -> Self {
        Self::Irregular(series)
    }
}

impl From<OhlcSeries> for SeriesData {
    fn from(series: OhlcSeries) -> Self {
        Self::Ohlc(series)
    }
}

impl From<Forecast> for SeriesData {
    fn from(forecast: Forecast) -> Self {
        Self::forecast(forecast, ForecastOptions::default())
    }
}

impl From<Density> for SeriesData {
    fn from(density: Density) -> Self {
        Self::Density(density)
    }
}

impl From<Categorical> for SeriesData {
    fn from(categorical: Categorical) -> Self {
        Self::Categorical(categorical)
    }
}

impl From<Table> for SeriesData {
    fn from(table: Table) -> Self {
        Self::tabular(table, FieldMapping::new())
    }
}
