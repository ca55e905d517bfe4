use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rendering type of a series, as understood by the charting front-end.
///
/// Unknown type names round-trip through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Spline,
    Area,
    AreaSpline,
    AreaRange,
    Column,
    Bar,
    Pie,
    Scatter,
    Candlestick,
    Ohlc,
    #[serde(untagged)]
    Other(String),
}

/// Styling and behavior options attached to one series.
///
/// Well-known keys are typed; everything else lives in `extra` and is passed
/// through verbatim to the serialized series entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub series_type: Option<SeriesType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl SeriesOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, series_type: SeriesType) -> Self {
        self.series_type = Some(series_type);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    #[must_use]
    pub fn with_linked_to(mut self, id: impl Into<String>) -> Self {
        self.linked_to = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = Some(fill_opacity);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Adds a passthrough key, e.g. `showInLegend` or `marker`.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Fills every key the caller left unset from `defaults`.
    ///
    /// Caller-supplied values always win, including passthrough keys.
    #[must_use]
    pub fn or_defaults(mut self, defaults: SeriesOptions) -> Self {
        self.name = self.name.or(defaults.name);
        self.series_type = self.series_type.or(defaults.series_type);
        self.color = self.color.or(defaults.color);
        self.id = self.id.or(defaults.id);
        self.z_index = self.z_index.or(defaults.z_index);
        self.linked_to = self.linked_to.or(defaults.linked_to);
        self.fill_opacity = self.fill_opacity.or(defaults.fill_opacity);
        self.line_width = self.line_width.or(defaults.line_width);
        for (key, value) in defaults.extra {
            self.extra.entry(key).or_insert(value);
        }
        self
    }
}
