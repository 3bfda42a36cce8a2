//! Dataset normalization pipeline.
//!
//! [`normalize`] runs the strictly ordered passes over a dataset:
//! header canonicalization, optional datetime column splitting,
//! directive-driven coercion, and null unification. Each pass produces a new
//! dataset value; malformed cells degrade to null and never abort the run.
//! Only structural shape violations (duplicate columns after a rename or
//! split collision) surface as errors.

use std::collections::BTreeMap;

use tabsync_model::{
    CoercionKind, ColumnMapping, ColumnTypes, Dataset, Record, Result, Row, Value,
};

use crate::canonical::canonicalize_name;
use crate::coerce::{coerce_date, coerce_datetime, coerce_number, sanitize_text};
use crate::detect::detect_datetime_column;

/// Normalize a dataset: canonicalize headers, optionally split detected
/// datetime columns, apply column type directives, and unify missing values.
pub fn normalize(dataset: Dataset, types: &ColumnTypes, split_datetime: bool) -> Result<Dataset> {
    let dataset = canonicalize_headers(dataset)?;
    let dataset = if split_datetime {
        split_datetime_columns(dataset)?
    } else {
        dataset
    };
    let dataset = apply_directives(dataset, types)?;
    unify_nulls(dataset)
}

/// Apply a final rename pass. Source names absent from the dataset are
/// no-ops; a rename that collides with an existing column is a structural
/// error.
pub fn apply_mapping(dataset: Dataset, mapping: &ColumnMapping) -> Result<Dataset> {
    if mapping.is_empty() {
        return Ok(dataset);
    }
    let (columns, rows) = dataset.into_parts();
    let renamed: Vec<String> = columns
        .iter()
        .map(|name| mapping.get(name).unwrap_or(name).clone())
        .collect();
    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(name, value)| (mapping.get(&name).unwrap_or(&name).clone(), value))
                .collect()
        })
        .collect();
    Dataset::new(renamed, rows)
}

/// Render every row into a flat, serialization-safe record mapping.
///
/// The output is an ordered, fully materialized sequence so a store client
/// can chunk it into fixed-size batches.
pub fn to_records(dataset: &Dataset) -> Vec<Record> {
    dataset
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect()
        })
        .collect()
}

fn canonicalize_headers(dataset: Dataset) -> Result<Dataset> {
    let (columns, rows) = dataset.into_parts();
    let renames: BTreeMap<String, String> = columns
        .iter()
        .map(|name| (name.clone(), canonicalize_name(name)))
        .collect();
    let columns = columns
        .iter()
        .map(|name| renames[name].clone())
        .collect();
    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(name, value)| {
                    let canonical = renames.get(&name).cloned().unwrap_or(name);
                    (canonical, value)
                })
                .collect()
        })
        .collect();
    Dataset::new(columns, rows)
}

/// Per-column plan for the datetime split pass.
enum ColumnPlan {
    Keep(String),
    Split {
        source: String,
        date: String,
        time: Option<String>,
    },
}

fn split_datetime_columns(dataset: Dataset) -> Result<Dataset> {
    let mut plans = Vec::with_capacity(dataset.n_columns());
    for name in dataset.columns() {
        let values = dataset.column_values(name).unwrap_or_default();
        let detection = detect_datetime_column(values.iter().copied());
        if !detection.is_datetime || name.starts_with("heure_") {
            plans.push(ColumnPlan::Keep(name.clone()));
            continue;
        }
        let date = if name.starts_with("date_") {
            name.clone()
        } else {
            format!("date_{name}")
        };
        let time = detection.has_time.then(|| format!("heure_{name}"));
        tracing::debug!(
            column = %name,
            date_column = %date,
            has_time = detection.has_time,
            "splitting datetime column"
        );
        plans.push(ColumnPlan::Split {
            source: name.clone(),
            date,
            time,
        });
    }

    let mut columns = Vec::new();
    for plan in &plans {
        match plan {
            ColumnPlan::Keep(name) => columns.push(name.clone()),
            ColumnPlan::Split { date, time, .. } => {
                columns.push(date.clone());
                if let Some(time) = time {
                    columns.push(time.clone());
                }
            }
        }
    }

    let (_, rows) = dataset.into_parts();
    let rows = rows
        .into_iter()
        .map(|mut row| {
            let mut out = Row::new();
            for plan in &plans {
                match plan {
                    ColumnPlan::Keep(name) => {
                        let value = row.remove(name).unwrap_or(Value::Null);
                        out.insert(name.clone(), value);
                    }
                    ColumnPlan::Split { source, date, time } => {
                        let value = row.remove(source).unwrap_or(Value::Null);
                        let (d, t) = coerce_datetime(&value);
                        out.insert(date.clone(), d.map_or(Value::Null, Value::Date));
                        if let Some(time) = time {
                            out.insert(time.clone(), t.map_or(Value::Null, Value::Time));
                        }
                    }
                }
            }
            out
        })
        .collect();

    Dataset::new(columns, rows)
}

fn apply_directives(dataset: Dataset, types: &ColumnTypes) -> Result<Dataset> {
    if types.is_empty() {
        return Ok(dataset);
    }
    let (columns, rows) = dataset.into_parts();
    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(name, value)| {
                    let coerced = match types.get(&name) {
                        Some(CoercionKind::Date) => {
                            coerce_date(&value).map_or(Value::Null, Value::Date)
                        }
                        Some(CoercionKind::Numeric) => {
                            coerce_number(&value).map_or(Value::Null, Value::Float)
                        }
                        Some(CoercionKind::Text) => {
                            sanitize_text(&value).map_or(Value::Null, Value::Text)
                        }
                        Some(CoercionKind::Unknown) | None => value,
                    };
                    (name, coerced)
                })
                .collect()
        })
        .collect();
    Dataset::new(columns, rows)
}

/// Collapse every missing-value representation (absent, NaN, blank text)
/// into [`Value::Null`].
fn unify_nulls(dataset: Dataset) -> Result<Dataset> {
    let (columns, rows) = dataset.into_parts();
    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(name, value)| {
                    let value = if value.is_missing() { Value::Null } else { value };
                    (name, value)
                })
                .collect()
        })
        .collect();
    Dataset::new(columns, rows)
}
