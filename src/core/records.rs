use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PointRecord, Scalar};
use crate::error::{ChartError, ChartResult};

/// Column-oriented table (rows x named columns).
///
/// Invariant: every column has the same length. Column order is insertion
/// order and is preserved in the records produced from the table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "TableParts")]
pub struct Table {
    columns: IndexMap<String, Vec<Scalar>>,
}

#[derive(Deserialize)]
struct TableParts {
    columns: IndexMap<String, Vec<Scalar>>,
}

impl TryFrom<TableParts> for Table {
    type Error = ChartError;

    fn try_from(parts: TableParts) -> ChartResult<Self> {
        Self::from_columns(parts.columns)
    }
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from named columns, rejecting ragged input.
    pub fn from_columns<I, K>(columns: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (K, Vec<Scalar>)>,
        K: Into<String>,
    {
        let mut table = Self::new();
        for (name, values) in columns {
            table = table.with_column(name, values)?;
        }
        Ok(table)
    }

    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<Scalar>,
    ) -> ChartResult<Self> {
        let name = name.into();
        if let Some(expected) = self.columns.values().next().map(Vec::len) {
            if values.len() != expected {
                return Err(ChartError::InvalidData(format!(
                    "column `{name}` has {} rows, expected {expected}",
                    values.len()
                )));
            }
        }
        if self.columns.contains_key(&name) {
            return Err(ChartError::InvalidData(format!(
                "duplicate column name `{name}`"
            )));
        }
        self.columns.insert(name, values);
        Ok(self)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.values().next().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Scalar]> {
        self.columns.get(name).map(Vec::as_slice)
    }
}

/// Flattens a table into one mapping record per row, keeping column order.
#[must_use]
pub fn table_to_records(table: &Table) -> Vec<PointRecord> {
    (0..table.row_count())
        .map(|row| {
            PointRecord::Fields(
                table
                    .columns
                    .iter()
                    .map(|(name, values)| (name.clone(), values[row].clone()))
                    .collect(),
            )
        })
        .collect()
}

/// Zips two parallel arrays positionally into `[x, y]` tuples.
pub fn zip_pairs<X, Y>(xs: &[X], ys: &[Y]) -> ChartResult<Vec<PointRecord>>
where
    X: Clone + Into<Scalar>,
    Y: Clone + Into<Scalar>,
{
    if xs.len() != ys.len() {
        return Err(ChartError::InvalidData(format!(
            "cannot zip arrays of different lengths: {} and {}",
            xs.len(),
            ys.len()
        )));
    }

    Ok(xs
        .iter()
        .zip(ys)
        .map(|(x, y)| PointRecord::pair(x.clone(), y.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{Table, table_to_records, zip_pairs};
    use crate::core::{PointRecord, Scalar};

    #[test]
    fn ragged_columns_are_rejected() {
        let err = Table::new()
            .with_column("a", vec![Scalar::from(1.0)])
            .and_then(|t| t.with_column("b", vec![Scalar::from(1.0), Scalar::from(2.0)]))
            .expect_err("ragged table must fail");
        assert!(format!("{err}").contains("column `b`"));
    }

    #[test]
    fn records_keep_column_order() {
        let table = Table::from_columns([
            ("z", vec![Scalar::from(1.0)]),
            ("a", vec![Scalar::from("x")]),
        ])
        .expect("table");

        let records = table_to_records(&table);
        let PointRecord::Fields(fields) = &records[0] else {
            panic!("expected mapping record");
        };
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
        assert_eq!(fields.get("a"), Some(&Scalar::Text("x".to_owned())));
    }

    #[test]
    fn zip_rejects_length_mismatch() {
        let err = zip_pairs(&[1.0, 2.0], &[1.0]).expect_err("mismatch must fail");
        assert!(format!("{err}").contains("different lengths"));
    }
}
