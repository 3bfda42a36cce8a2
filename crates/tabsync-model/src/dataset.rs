use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ModelError, Result};
use crate::value::Value;

/// One row of cells, keyed by column name.
pub type Row = BTreeMap<String, Value>;

/// An ordered tabular dataset: column names plus rows of dynamically-typed
/// cells.
///
/// The shape invariant is enforced at construction: column names are unique
/// and every row carries exactly the dataset's column set (cells may be
/// [`Value::Null`]). Transformations produce new datasets; rows are never
/// mutated in place.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, validating the shape invariant.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateColumn(name.clone()));
            }
        }
        for (idx, row) in rows.iter().enumerate() {
            for key in row.keys() {
                if !seen.contains(key.as_str()) {
                    return Err(ModelError::RowShape {
                        row: idx,
                        detail: format!("unexpected key {key:?}"),
                    });
                }
            }
            if row.len() != columns.len() {
                let missing = columns
                    .iter()
                    .find(|name| !row.contains_key(name.as_str()))
                    .cloned()
                    .unwrap_or_default();
                return Err(ModelError::RowShape {
                    row: idx,
                    detail: format!("missing key {missing:?}"),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// An empty dataset with the given columns.
    pub fn empty(columns: Vec<String>) -> Result<Self> {
        Self::new(columns, Vec::new())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// All cells of one column in row order, or `None` for an unknown column.
    pub fn column_values(&self, name: &str) -> Option<Vec<&Value>> {
        if !self.columns.iter().any(|c| c == name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| row.get(name).unwrap_or(&Value::Null))
                .collect(),
        )
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Row>) {
        (self.columns, self.rows)
    }
}
