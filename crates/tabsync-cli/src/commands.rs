//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use tabsync_ingest::read_csv;
use tabsync_model::{ColumnMapping, ColumnSchema, ColumnTypes};
use tabsync_normalize::{apply_mapping, canonicalize_name, infer_schema, normalize, to_records};
use tabsync_store::{InsertReport, MemoryStore, TableStore, create_table_sql, insert_in_batches};

use crate::cli::{PreviewArgs, ProcessArgs};
use crate::summary::print_preview;

/// What `process` produced, for the summary printer and the exit code.
pub struct ProcessOutcome {
    pub table: String,
    pub schema: Vec<ColumnSchema>,
    pub n_records: usize,
    pub report: InsertReport,
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let dataset = read_csv(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    print_preview(&dataset, args.rows);
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessOutcome> {
    let dataset = read_csv(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let types = load_types(args.types.as_deref())?;
    let mapping = load_mapping(args.mapping.as_deref())?;

    tracing::info!(
        rows = dataset.n_rows(),
        columns = dataset.n_columns(),
        split_datetime = args.split_datetime,
        "normalizing dataset"
    );
    let normalized = normalize(dataset, &types, args.split_datetime)?;
    let normalized = apply_mapping(normalized, &mapping)?;
    let schema = infer_schema(&normalized);
    let records = to_records(&normalized);

    if let Some(path) = &args.out {
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), records = records.len(), "wrote records");
    }

    let table = args
        .table
        .clone()
        .unwrap_or_else(|| default_table_name(&args.file));

    if args.ddl {
        println!("{}", create_table_sql(&table, &schema));
    }

    // Dry-run insertion: exercises the chunking contract without a backend.
    let mut store = MemoryStore::new();
    store
        .create_table(&table, &schema)
        .with_context(|| format!("failed to stage table {table:?}"))?;
    let report = insert_in_batches(&mut store, &table, &records, args.batch_size);

    Ok(ProcessOutcome {
        table,
        schema,
        n_records: records.len(),
        report,
    })
}

fn default_table_name(file: &Path) -> String {
    let stem = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let canonical = canonicalize_name(&stem);
    if canonical.is_empty() {
        "import".to_string()
    } else {
        canonical
    }
}

fn load_types(path: Option<&Path>) -> Result<ColumnTypes> {
    let Some(path) = path else {
        return Ok(ColumnTypes::new());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid column types file {}", path.display()))
}

fn load_mapping(path: Option<&Path>) -> Result<ColumnMapping> {
    let Some(path) = path else {
        return Ok(ColumnMapping::new());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid column mapping file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_falls_back_for_odd_stems() {
        assert_eq!(default_table_name(Path::new("Ventes 2026.csv")), "ventes_2026");
        assert_eq!(default_table_name(Path::new("€€.csv")), "import");
    }
}
