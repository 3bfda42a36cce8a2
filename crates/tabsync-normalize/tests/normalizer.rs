//! End-to-end tests for the dataset normalization pipeline.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use tabsync_model::{CoercionKind, ColumnTypes, Dataset, Row, SqlType, Value};
use tabsync_normalize::{apply_mapping, infer_schema, normalize, to_records};

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn dataset(columns: &[&str], rows: Vec<Vec<Value>>) -> Dataset {
    let columns: Vec<String> = columns.iter().map(|c| (*c).to_string()).collect();
    let rows = rows
        .into_iter()
        .map(|cells| {
            columns
                .iter()
                .cloned()
                .zip(cells)
                .collect::<Row>()
        })
        .collect();
    Dataset::new(columns, rows).expect("well-formed test dataset")
}

#[test]
fn canonicalizes_headers() {
    let ds = dataset(&["Date d'achat", "Prix (€)"], vec![vec![text("x"), text("1")]]);
    let out = normalize(ds, &ColumnTypes::new(), false).unwrap();
    assert_eq!(out.columns(), ["date_dachat", "prix_"]);
}

#[test]
fn splits_datetime_column_with_time() {
    let ds = dataset(
        &["X"],
        vec![
            vec![text("21/01/2026 14:30")],
            vec![text("22/01/2026 09:00")],
        ],
    );
    let out = normalize(ds, &ColumnTypes::new(), true).unwrap();
    assert_eq!(out.columns(), ["date_x", "heure_x"]);

    let dates = out.column_values("date_x").unwrap();
    assert_eq!(
        dates,
        vec![
            &Value::Date(NaiveDate::from_ymd_opt(2026, 1, 21).unwrap()),
            &Value::Date(NaiveDate::from_ymd_opt(2026, 1, 22).unwrap()),
        ]
    );
    let times = out.column_values("heure_x").unwrap();
    assert_eq!(
        times,
        vec![
            &Value::Time(NaiveTime::from_hms_opt(14, 30, 0).unwrap()),
            &Value::Time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
        ]
    );
    // The source column is gone: the split is irreversible.
    assert!(out.column_values("x").is_none());
}

#[test]
fn date_only_split_emits_no_time_column() {
    let ds = dataset(
        &["livraison"],
        vec![vec![text("21/01/2026")], vec![text("22/01/2026")]],
    );
    let out = normalize(ds, &ColumnTypes::new(), true).unwrap();
    assert_eq!(out.columns(), ["date_livraison"]);
}

#[test]
fn split_skipped_without_flag() {
    let ds = dataset(&["x"], vec![vec![text("21/01/2026 14:30")]]);
    let out = normalize(ds, &ColumnTypes::new(), false).unwrap();
    assert_eq!(out.columns(), ["x"]);
}

#[test]
fn unparseable_values_degrade_to_null_inside_split() {
    let ds = dataset(
        &["x"],
        vec![vec![text("21/01/2026 14:30")], vec![text("???")]],
    );
    let out = normalize(ds, &ColumnTypes::new(), true).unwrap();
    let dates = out.column_values("date_x").unwrap();
    assert_eq!(dates[1], &Value::Null);
    let times = out.column_values("heure_x").unwrap();
    assert_eq!(times[1], &Value::Null);
}

#[test]
fn directives_coerce_listed_columns_only() {
    let mut types = ColumnTypes::new();
    types.insert("prix".to_string(), CoercionKind::Numeric);
    types.insert("naissance".to_string(), CoercionKind::Date);
    types.insert("nom".to_string(), CoercionKind::Text);
    types.insert("absente".to_string(), CoercionKind::Numeric);

    let ds = dataset(
        &["Prix", "Naissance", "Nom", "libre"],
        vec![vec![
            text("1 000,50"),
            text("21/01/2026"),
            text("  Héloïse "),
            text("21/01/2026"),
        ]],
    );
    let out = normalize(ds, &types, false).unwrap();
    assert_eq!(
        out.column_values("prix").unwrap(),
        vec![&Value::Float(1000.5)]
    );
    assert_eq!(
        out.column_values("naissance").unwrap(),
        vec![&Value::Date(NaiveDate::from_ymd_opt(2026, 1, 21).unwrap())]
    );
    assert_eq!(
        out.column_values("nom").unwrap(),
        vec![&Value::Text("Heloise".to_string())]
    );
    // Unlisted columns stay untouched apart from null unification.
    assert_eq!(
        out.column_values("libre").unwrap(),
        vec![&text("21/01/2026")]
    );
}

#[test]
fn null_unification_is_exhaustive() {
    let ds = dataset(
        &["a", "b", "c"],
        vec![vec![Value::Float(f64::NAN), text("   "), Value::Null]],
    );
    let out = normalize(ds, &ColumnTypes::new(), false).unwrap();
    for name in ["a", "b", "c"] {
        assert_eq!(out.column_values(name).unwrap(), vec![&Value::Null]);
    }
}

#[test]
fn mapping_renames_after_normalization() {
    let ds = dataset(&["Prix"], vec![vec![text("5")]]);
    let out = normalize(ds, &ColumnTypes::new(), false).unwrap();

    let mut mapping = BTreeMap::new();
    mapping.insert("prix".to_string(), "unit_price".to_string());
    mapping.insert("missing_source".to_string(), "ignored".to_string());
    let out = apply_mapping(out, &mapping).unwrap();
    assert_eq!(out.columns(), ["unit_price"]);
    assert_eq!(out.column_values("unit_price").unwrap(), vec![&text("5")]);
}

#[test]
fn records_contain_only_plain_scalars() {
    let mut types = ColumnTypes::new();
    types.insert("quand".to_string(), CoercionKind::Date);
    types.insert("combien".to_string(), CoercionKind::Numeric);

    let ds = dataset(
        &["Quand", "Combien"],
        vec![vec![text("21/01/2026"), text("bad")]],
    );
    let out = normalize(ds, &types, false).unwrap();
    let records = to_records(&out);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["quand"], serde_json::json!("2026-01-21"));
    assert_eq!(records[0]["combien"], serde_json::Value::Null);
}

#[test]
fn schema_inference_is_deterministic_and_ordered() {
    let mut types = ColumnTypes::new();
    types.insert("montant".to_string(), CoercionKind::Numeric);
    types.insert("quand".to_string(), CoercionKind::Date);

    let ds = dataset(
        &["Montant", "Quand", "Commentaire"],
        vec![
            vec![text("10"), text("21/01/2026"), text("ok")],
            vec![text("2,5"), text("22/01/2026"), Value::Null],
        ],
    );
    let out = normalize(ds, &types, false).unwrap();
    let first = infer_schema(&out);
    let second = infer_schema(&out);
    assert_eq!(first, second);

    let names: Vec<&str> = first.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["montant", "quand", "commentaire"]);
    assert_eq!(first[0].sql_type, SqlType::Double);
    assert_eq!(first[1].sql_type, SqlType::Timestamp);
    assert_eq!(first[2].sql_type, SqlType::Text);
}

#[test]
fn header_collision_is_a_structural_error() {
    let ds = dataset(
        &["Prix (€)", "Prix !"],
        vec![vec![text("1"), text("2")]],
    );
    assert!(normalize(ds, &ColumnTypes::new(), false).is_err());
}
