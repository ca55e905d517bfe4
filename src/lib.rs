//! chart-series: typed series adapters for Highcharts-style configuration.
//!
//! Statistical data shapes (numeric vectors, time series, OHLC frames,
//! forecasts, density estimates, categorical vectors, tables) are converted
//! into uniform point records and appended to an in-memory chart
//! configuration that serializes to the front-end's JSON schema.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AdapterConfig, ChartConfig, SeriesAdapter, SeriesData, SeriesEntry, SeriesOptions};
pub use error::{ChartError, ChartResult};
