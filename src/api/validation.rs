use crate::error::{ChartError, ChartResult};

use super::SeriesOptions;

/// Keys with a typed field on `SeriesOptions`, plus the series payload key.
const RESERVED_KEYS: [&str; 9] = [
    "data",
    "name",
    "type",
    "color",
    "id",
    "zIndex",
    "linkedTo",
    "fillOpacity",
    "lineWidth",
];

/// Checks caller options before they are merged into a series entry.
///
/// Passthrough keys must be non-empty camelCase-style identifiers: dotted
/// names (`show.in.legend`) are rejected with a camelCase suggestion, and
/// keys that shadow a typed field or `data` are rejected.
pub(crate) fn validate_series_options(
    operation: &str,
    options: &SeriesOptions,
) -> ChartResult<()> {
    for key in options.extra.keys() {
        if key.trim().is_empty() {
            return Err(ChartError::InvalidArgument(format!(
                "{operation}: option names must not be empty"
            )));
        }
        if key.contains('.') {
            return Err(ChartError::InvalidArgument(format!(
                "{operation}: option `{key}` is not valid, use camelCase (e.g. `{}`)",
                dotted_to_camel_case(key)
            )));
        }
        if RESERVED_KEYS.contains(&key.as_str()) {
            return Err(ChartError::InvalidArgument(format!(
                "{operation}: option `{key}` must be set through its typed field"
            )));
        }
    }

    if let Some(fill_opacity) = options.fill_opacity {
        if !fill_opacity.is_finite() || !(0.0..=1.0).contains(&fill_opacity) {
            return Err(ChartError::InvalidArgument(format!(
                "{operation}: fillOpacity must be within [0, 1]"
            )));
        }
    }

    if let Some(line_width) = options.line_width {
        if !line_width.is_finite() || line_width < 0.0 {
            return Err(ChartError::InvalidArgument(format!(
                "{operation}: lineWidth must be finite and >= 0"
            )));
        }
    }

    Ok(())
}

fn dotted_to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, part) in key.split('.').filter(|p| !p.is_empty()).enumerate() {
        let mut chars = part.chars();
        match chars.next() {
            Some(first) if i > 0 => {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
            _ => out.push_str(part),
        }
    }
    out
}
