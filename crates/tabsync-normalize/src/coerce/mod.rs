//! Best-effort value coercion.
//!
//! Every coercer is a pure, total function: null or unparseable input yields
//! `None`, never an error. This is the hard invariant of the engine; a bad
//! cell degrades to null instead of failing the pass.
//!
//! - **numeric**: locale-tolerant number parsing (spaces, currency symbols,
//!   comma/dot disambiguation)
//! - **datetime**: date and combined date+time parsing, including
//!   spreadsheet serial numbers
//! - **text**: diacritic and control-character stripping

pub mod datetime;
pub mod numeric;
pub mod text;

pub use datetime::{coerce_date, coerce_datetime};
pub use numeric::coerce_number;
pub use text::sanitize_text;
