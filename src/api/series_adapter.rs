use serde_json::Value;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::core::{
    Categorical, Density, Forecast, IrregularTimeSeries, OhlcSeries, PointRecord,
    RegularTimeSeries, Table, table_to_records,
};
use crate::error::ChartResult;

use super::validation::validate_series_options;
use super::{
    AdapterConfig, ChartConfig, FieldMapping, ForecastOptions, SeriesData, SeriesEntry,
    SeriesOptions, SeriesType,
};

const ADD_SERIES: &str = "add_series";
const ADD_SERIES_LIST: &str = "add_series_list";

/// Converts typed data into series entries and appends them to a chart.
///
/// Every operation builds all new entries before touching the chart, so a
/// failed call leaves the configuration unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesAdapter {
    config: AdapterConfig,
}

impl SeriesAdapter {
    pub fn new(config: AdapterConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> AdapterConfig {
        self.config
    }

    /// Appends the series built from `data` and `options` to `chart`.
    ///
    /// Appends one entry for every input shape except forecasts, which append
    /// the point forecast plus optional observed and interval series. Tabular
    /// input with a non-empty field mapping is not converted and leaves the
    /// chart unchanged.
    pub fn add_series(
        &self,
        chart: &mut ChartConfig,
        data: impl Into<SeriesData>,
        options: SeriesOptions,
    ) -> ChartResult<()> {
        let data = data.into();
        validate_series_options(ADD_SERIES, &options)?;
        if self.config.verbose {
            debug!(branch = %data.kind(), "add_series dispatch");
        }

        let entries = match data {
            SeriesData::Literal(points) => vec![SeriesEntry::new(points, options)],
            SeriesData::Numeric(values) => vec![self.numeric_entry(values, options)],
            SeriesData::TimeSeries(series) => vec![self.time_series_entry(&series, options)?],
            SeriesData::Irregular(series) => vec![self.irregular_entry(&series, options)?],
            SeriesData::Ohlc(series) => vec![self.ohlc_entry(&series, options)],
            SeriesData::Forecast {
                forecast,
                options: forecast_options,
            } => self.forecast_entries(&forecast, forecast_options, options)?,
            SeriesData::Density(density) => vec![density_entry(&density, options)?],
            SeriesData::Categorical(categorical) => vec![categorical_entry(&categorical, options)],
            SeriesData::Tabular { table, mapping } => {
                match tabular_entry(&table, &mapping, options) {
                    Some(entry) => vec![entry],
                    None => return Ok(()),
                }
            }
        };

        let added = entries.len();
        chart.extend_series(entries);
        trace!(added, total = chart.series_len(), "appended series");
        Ok(())
    }

    /// Appends literal series entries in order, all or nothing.
    pub fn add_series_list(
        &self,
        chart: &mut ChartConfig,
        entries: Vec<SeriesEntry>,
    ) -> ChartResult<()> {
        for entry in &entries {
            validate_series_options(ADD_SERIES_LIST, &entry.options)?;
        }
        if self.config.verbose {
            debug!(count = entries.len(), "add_series_list");
        }
        let added = entries.len();
        chart.extend_series(entries);
        trace!(added, total = chart.series_len(), "appended series list");
        Ok(())
    }

    /// Removes every series named in `names`; see [`ChartConfig::remove_series`].
    pub fn remove_series<S: AsRef<str>>(
        &self,
        chart: &mut ChartConfig,
        names: &[S],
    ) -> ChartResult<usize> {
        let removed = chart.remove_series(names)?;
        if self.config.verbose {
            debug!(removed, "remove_series");
        }
        Ok(removed)
    }

    /// Document-level `add_series`: validates that `document` is a chart
    /// configuration, appends, and returns the updated document.
    pub fn add_series_to_document(
        &self,
        document: &Value,
        data: impl Into<SeriesData>,
        options: SeriesOptions,
    ) -> ChartResult<Value> {
        let mut chart = ChartConfig::from_json_value(document.clone())?;
        self.add_series(&mut chart, data, options)?;
        chart.to_json_value()
    }

    /// Document-level `remove_series`.
    pub fn remove_series_from_document<S: AsRef<str>>(
        &self,
        document: &Value,
        names: &[S],
    ) -> ChartResult<Value> {
        let mut chart = ChartConfig::from_json_value(document.clone())?;
        self.remove_series(&mut chart, names)?;
        chart.to_json_value()
    }

    fn numeric_entry(&self, values: Vec<f64>, options: SeriesOptions) -> SeriesEntry {
        let mut points: Vec<PointRecord> = values.into_iter().map(PointRecord::from).collect();
        // A lone point is not drawn by the front-end's line renderers.
        if points.len() == 1 && self.config.pad_single_point_numeric {
            points.push(points[0].clone());
        }
        SeriesEntry::new(points, options)
    }

    fn time_series_entry(
        &self,
        series: &RegularTimeSeries,
        options: SeriesOptions,
    ) -> ChartResult<SeriesEntry> {
        let points = series.to_points(self.config.timestamp_unit)?;
        Ok(SeriesEntry::new(points, options))
    }

    fn irregular_entry(
        &self,
        series: &IrregularTimeSeries,
        options: SeriesOptions,
    ) -> ChartResult<SeriesEntry> {
        if series.is_ohlc() {
            if self.config.verbose {
                debug!(columns = ?series.column_names(), "irregular series recognized as ohlc");
            }
            let ohlc = OhlcSeries::from_irregular(series)?;
            return Ok(self.ohlc_entry(&ohlc, options));
        }
        let points = series.to_points(self.config.timestamp_unit)?;
        Ok(SeriesEntry::new(points, options))
    }

    fn ohlc_entry(&self, series: &OhlcSeries, options: SeriesOptions) -> SeriesEntry {
        let mut defaults = SeriesOptions::new().with_type(SeriesType::Candlestick);
        defaults.name = series.default_name();
        SeriesEntry::new(
            series.to_points(self.config.timestamp_unit),
            options.or_defaults(defaults),
        )
    }

    fn forecast_entries(
        &self,
        forecast: &Forecast,
        forecast_options: ForecastOptions,
        options: SeriesOptions,
    ) -> ChartResult<Vec<SeriesEntry>> {
        forecast.validate()?;
        let unit = self.config.timestamp_unit;
        let id = options.id.clone().unwrap_or_else(generated_series_id);
        let name = options
            .name
            .clone()
            .unwrap_or_else(|| forecast.method.clone());
        let band_fill_opacity = options
            .fill_opacity
            .unwrap_or(self.config.forecast_fill_opacity);

        let mut shared = options;
        shared.name = None;
        shared.id = None;
        shared.fill_opacity = None;

        let mut entries = Vec::with_capacity(2 + forecast.intervals.len());
        if forecast_options.add_original {
            entries.push(SeriesEntry::new(
                forecast.observed.to_points(unit)?,
                shared.clone(),
            ));
        }

        let mut point_forecast = shared.clone();
        point_forecast.name = Some(name.clone());
        point_forecast.id = Some(id.clone());
        entries.push(SeriesEntry::new(
            forecast.mean.to_points(unit)?,
            point_forecast,
        ));

        if forecast_options.add_levels {
            for interval in &forecast.intervals {
                let mut band = shared.clone();
                band.name = Some(Forecast::band_name(&name, interval.level));
                band.series_type = Some(SeriesType::AreaRange);
                band.linked_to = Some(id.clone());
                band.fill_opacity = Some(band_fill_opacity);
                band.line_width = Some(0.0);
                band.z_index = Some(self.config.forecast_band_z_index);
                entries.push(SeriesEntry::new(
                    forecast.band_points(interval, unit)?,
                    band,
                ));
            }
        }

        Ok(entries)
    }
}

fn density_entry(density: &Density, options: SeriesOptions) -> ChartResult<SeriesEntry> {
    Ok(SeriesEntry::new(density.to_points()?, options))
}

fn categorical_entry(categorical: &Categorical, options: SeriesOptions) -> SeriesEntry {
    SeriesEntry::new(categorical.to_points(), options)
}

fn tabular_entry(
    table: &Table,
    mapping: &FieldMapping,
    options: SeriesOptions,
) -> Option<SeriesEntry> {
    if !mapping.is_empty() {
        // TODO: resolve mapped columns into named point fields (x, y, name, ...).
        warn!(
            columns = ?table.column_names(),
            "tabular series with a field mapping is not supported; chart left unchanged"
        );
        return None;
    }
    Some(SeriesEntry::new(table_to_records(table), options))
}

fn generated_series_id() -> String {
    Uuid::new_v4().simple().to_string()
}
