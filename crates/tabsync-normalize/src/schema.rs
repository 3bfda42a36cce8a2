//! Destination schema inference.

use tabsync_model::{ColumnSchema, Dataset, SqlType, Value};

/// Infer a destination column type per column, in dataset order.
///
/// Value-domain based: a numeric column whose values are all
/// integer-valued maps to an integer type, any fractional value makes it
/// double precision, an all-date/time column maps to timestamp, and
/// everything else (mixed, text, all-null) falls back to text. Deterministic
/// for a given dataset. The result is advisory input to DDL generation; the
/// engine never executes it.
pub fn infer_schema(dataset: &Dataset) -> Vec<ColumnSchema> {
    dataset
        .columns()
        .iter()
        .map(|name| {
            let values = dataset.column_values(name).unwrap_or_default();
            ColumnSchema::new(name.clone(), infer_column_type(&values))
        })
        .collect()
}

fn infer_column_type(values: &[&Value]) -> SqlType {
    let mut saw_value = false;
    let mut all_numeric = true;
    let mut integer_valued = true;
    let mut all_temporal = true;
    for value in values {
        match value {
            Value::Null => continue,
            Value::Int(_) => {
                all_temporal = false;
            }
            Value::Float(f) => {
                all_temporal = false;
                if !f.is_finite() || f.fract() != 0.0 {
                    integer_valued = false;
                }
            }
            Value::Date(_) | Value::Time(_) => {
                all_numeric = false;
            }
            Value::Bool(_) | Value::Text(_) => {
                all_numeric = false;
                all_temporal = false;
            }
        }
        saw_value = true;
    }
    if !saw_value {
        return SqlType::Text;
    }
    if all_numeric {
        if integer_valued {
            SqlType::Integer
        } else {
            SqlType::Double
        }
    } else if all_temporal {
        SqlType::Timestamp
    } else {
        SqlType::Text
    }
}
