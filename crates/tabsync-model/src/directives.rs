use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Caller-requested coercion for one column.
///
/// Unrecognized kinds deserialize as [`CoercionKind::Unknown`] and act as
/// no-ops: directive maps are permissive by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionKind {
    Date,
    Numeric,
    Text,
    #[serde(other)]
    Unknown,
}

/// Map from canonical column name to the coercion to apply. Columns absent
/// from the map are left as-is apart from null unification.
pub type ColumnTypes = BTreeMap<String, CoercionKind>;

/// Final rename pass applied after normalization, before schema inference and
/// record emission. Source names not present in the dataset are no-ops.
pub type ColumnMapping = BTreeMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kinds_deserialize_as_noop() {
        let types: ColumnTypes =
            serde_json::from_str(r#"{"price": "numeric", "ref": "uuid"}"#).unwrap();
        assert_eq!(types.get("price"), Some(&CoercionKind::Numeric));
        assert_eq!(types.get("ref"), Some(&CoercionKind::Unknown));
    }
}
