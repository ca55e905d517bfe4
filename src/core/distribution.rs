use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::records::zip_pairs;
use crate::core::{PointRecord, Scalar};
use crate::error::{ChartError, ChartResult};

/// Kernel density estimate: evaluation grid `x` and estimated density `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Density {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Density {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> ChartResult<Self> {
        if x.len() != y.len() {
            return Err(ChartError::InvalidData(format!(
                "density coordinates differ in length: x={}, y={}",
                x.len(),
                y.len()
            )));
        }
        Ok(Self { x, y })
    }

    pub fn to_points(&self) -> ChartResult<Vec<PointRecord>> {
        zip_pairs(&self.x, &self.y)
    }
}

/// Categorical vector: free text, or a factor with declared levels.
///
/// `None` entries are missing values and are not counted. Deserialized
/// factors are checked against their levels like [`Categorical::factor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategoricalParts")]
pub struct Categorical {
    values: Vec<Option<String>>,
    levels: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct CategoricalParts {
    values: Vec<Option<String>>,
    #[serde(default)]
    levels: Option<Vec<String>>,
}

impl TryFrom<CategoricalParts> for Categorical {
    type Error = ChartError;

    fn try_from(parts: CategoricalParts) -> ChartResult<Self> {
        match parts.levels {
            Some(levels) => Self::factor(parts.values, levels),
            None => Ok(Self::text_with_missing(parts.values)),
        }
    }
}

impl Categorical {
    /// Free text values; counts are reported in lexicographic order.
    #[must_use]
    pub fn text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(|v| Some(v.into())).collect(),
            levels: None,
        }
    }

    /// Text values with missing entries.
    #[must_use]
    pub fn text_with_missing(values: Vec<Option<String>>) -> Self {
        Self {
            values,
            levels: None,
        }
    }

    /// Factor values; counts are reported in level order. Every present
    /// value must be one of the levels.
    pub fn factor(values: Vec<Option<String>>, levels: Vec<String>) -> ChartResult<Self> {
        if let Some(unknown) = values
            .iter()
            .flatten()
            .find(|value| !levels.contains(value))
        {
            return Err(ChartError::InvalidData(format!(
                "factor value `{unknown}` is not one of its levels"
            )));
        }
        Ok(Self {
            values,
            levels: Some(levels),
        })
    }

    /// Occurrences per distinct non-missing value.
    #[must_use]
    pub fn counts(&self) -> IndexMap<String, u64> {
        let mut sorted: BTreeMap<&str, u64> = BTreeMap::new();
        for value in self.values.iter().flatten() {
            *sorted.entry(value.as_str()).or_default() += 1;
        }

        match &self.levels {
            Some(levels) => levels
                .iter()
                .filter_map(|level| {
                    sorted
                        .get(level.as_str())
                        .map(|count| (level.clone(), *count))
                })
                .collect(),
            None => sorted
                .into_iter()
                .map(|(value, count)| (value.to_owned(), count))
                .collect(),
        }
    }

    /// One `{name, y}` record per distinct value.
    #[must_use]
    pub fn to_points(&self) -> Vec<PointRecord> {
        self.counts()
            .into_iter()
            .map(|(name, count)| {
                PointRecord::fields([
                    ("name", Scalar::Text(name)),
                    ("y", Scalar::number(count as f64)),
                ])
            })
            .collect()
    }
}
