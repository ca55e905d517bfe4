use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use super::ChartConfig;
use super::chart_config::SERIES_KEY;

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ChartConfig {
    /// Parses an untyped document into a chart configuration.
    ///
    /// Fails with `InvalidArgument` unless the document is an object whose
    /// optional `series` key is an array of objects that each carry a `data`
    /// array.
    pub fn from_json_value(document: Value) -> ChartResult<Self> {
        let Value::Object(root) = &document else {
            return Err(ChartError::InvalidArgument(format!(
                "chart configuration must be a JSON object, got {}",
                json_kind(&document)
            )));
        };

        if let Some(series) = root.get(SERIES_KEY) {
            let Value::Array(entries) = series else {
                return Err(ChartError::InvalidArgument(format!(
                    "chart configuration `series` must be an array, got {}",
                    json_kind(series)
                )));
            };
            for (position, entry) in entries.iter().enumerate() {
                match entry.get("data") {
                    Some(Value::Array(_)) => {}
                    Some(other) => {
                        return Err(ChartError::InvalidArgument(format!(
                            "series entry {position} has `data` of type {}, expected array",
                            json_kind(other)
                        )));
                    }
                    None => {
                        return Err(ChartError::InvalidArgument(format!(
                            "series entry {position} is not an object with a `data` array"
                        )));
                    }
                }
            }
        }

        serde_json::from_value(document).map_err(|e| {
            ChartError::InvalidArgument(format!("not a recognized chart configuration: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let document: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidArgument(format!("failed to parse chart configuration json: {e}"))
        })?;
        Self::from_json_value(document)
    }

    pub fn to_json_value(&self) -> ChartResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart configuration: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart configuration: {e}"))
        })
    }
}
