//! Normalization engine for heterogeneous tabular data.
//!
//! Converts spreadsheet-shaped datasets of unknown formatting into a
//! canonical, typed form:
//! - **canonical**: header name canonicalization
//! - **coerce**: best-effort value coercion (numbers, dates, datetimes, text)
//! - **detect**: heuristic combined date+time column detection
//! - **normalizer**: the full dataset pipeline (canonicalize, split, coerce,
//!   unify nulls) plus mapping application and record emission
//! - **schema**: destination column type inference
//!
//! # Design principles
//!
//! - **Stateless functions**: every coercer is a pure function over one value
//! - **Degrade, never raise**: an unparseable cell becomes null; only
//!   structural shape violations surface as errors

pub mod canonical;
pub mod coerce;
pub mod detect;
pub mod normalizer;
pub mod schema;

pub use canonical::canonicalize_name;
pub use coerce::{coerce_date, coerce_datetime, coerce_number, sanitize_text};
pub use detect::{detect_datetime_column, DatetimeDetection, SAMPLE_SIZE};
pub use normalizer::{apply_mapping, normalize, to_records};
pub use schema::infer_schema;
