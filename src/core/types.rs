use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Single cell value carried by a point record.
///
/// Missing observations are represented as `Null`; the number constructor maps
/// non-finite input (`NaN`, infinities) to `Null` so the serialized document
/// never carries values the front-end cannot parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    #[must_use]
    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else {
            Self::Null
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::number(value as f64)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Fixed-size tuple used for `[x, y]` and `[t, open, high, low, close, volume]` points.
pub type PointTuple = SmallVec<[Scalar; 6]>;

/// One data item within a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointRecord {
    Scalar(Scalar),
    Tuple(PointTuple),
    Fields(IndexMap<String, Scalar>),
}

impl PointRecord {
    #[must_use]
    pub fn pair(x: impl Into<Scalar>, y: impl Into<Scalar>) -> Self {
        let mut tuple = PointTuple::new();
        tuple.push(x.into());
        tuple.push(y.into());
        Self::Tuple(tuple)
    }

    #[must_use]
    pub fn tuple<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        Self::Tuple(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Scalar)>,
        K: Into<String>,
    {
        Self::Fields(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    #[must_use]
    pub fn as_tuple(&self) -> Option<&[Scalar]> {
        match self {
            Self::Tuple(values) => Some(values),
            _ => None,
        }
    }

    /// Returns a named field for mapping records.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Scalar> {
        match self {
            Self::Fields(fields) => fields.get(name),
            _ => None,
        }
    }
}

impl From<Scalar> for PointRecord {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<f64> for PointRecord {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::number(value))
    }
}
