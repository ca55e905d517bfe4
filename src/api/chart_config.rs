use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::PointRecord;

use super::SeriesOptions;

pub(crate) const SERIES_KEY: &str = "series";

/// One series in the chart configuration: its points plus styling options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub data: Vec<PointRecord>,
    #[serde(flatten)]
    pub options: SeriesOptions,
}

impl SeriesEntry {
    #[must_use]
    pub fn new(data: Vec<PointRecord>, options: SeriesOptions) -> Self {
        Self { data, options }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.options.name.as_deref()
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.options.id.as_deref()
    }
}

/// In-memory chart configuration document.
///
/// `series` keeps insertion order and allows duplicate names. Every other
/// top-level key (title, axes, tooltip, ...) is carried verbatim in `options`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    series: Vec<SeriesEntry>,
    #[serde(flatten)]
    pub options: IndexMap<String, Value>,
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a top-level chart option such as `title` or `xAxis`.
    ///
    /// The `series` key is owned by the series list and is ignored here.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key == SERIES_KEY {
            warn!("ignoring top-level `series` option; use the series adapter instead");
            return self;
        }
        self.options.insert(key, value.into());
        self
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesEntry] {
        &self.series
    }

    #[must_use]
    pub fn series_len(&self) -> usize {
        self.series.len()
    }

    /// Names of all series in order; unnamed entries are skipped.
    #[must_use]
    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().filter_map(SeriesEntry::name).collect()
    }

    #[must_use]
    pub fn find_series(&self, name: &str) -> Option<&SeriesEntry> {
        self.series.iter().find(|entry| entry.name() == Some(name))
    }

    pub(crate) fn extend_series(&mut self, entries: Vec<SeriesEntry>) {
        self.series.extend(entries);
    }

    pub(crate) fn retain_series<F>(&mut self, keep: F)
    where
        F: FnMut(&SeriesEntry) -> bool,
    {
        self.series.retain(keep);
    }
}
