//! Data model for the tabular import engine.
//!
//! A [`Dataset`] is an ordered set of named columns over rows of
//! dynamically-typed [`Value`] cells. The normalization engine consumes a
//! dataset, transforms it, and renders it into flat [`Record`] mappings plus
//! an inferred [`ColumnSchema`] list for destination-table creation.

pub mod dataset;
pub mod directives;
pub mod error;
pub mod schema;
pub mod value;

pub use dataset::{Dataset, Row};
pub use directives::{CoercionKind, ColumnMapping, ColumnTypes};
pub use error::{ModelError, Result};
pub use schema::{ColumnSchema, SqlType};
pub use value::{Record, Value};
