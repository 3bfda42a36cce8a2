//! Destination store boundary.
//!
//! The engine depends on exactly two store capabilities: creating a table
//! from an inferred schema and inserting a batch of records. [`TableStore`]
//! is that seam; the engine itself never opens a network connection.
//!
//! [`insert_in_batches`] chunks a materialized record sequence into
//! fixed-size batches. Chunk order is preserved and a failed chunk never
//! blocks or rolls back the others: partial success is a valid terminal
//! state, reported per chunk.

use std::collections::BTreeMap;

use thiserror::Error;

use tabsync_model::{ColumnSchema, Record};

/// Default records-per-batch for bounded-size store calls.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("table {0:?} does not exist")]
    UnknownTable(String),
    #[error("table {0:?} already exists")]
    TableExists(String),
    #[error("{0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// The two store operations the engine depends on.
pub trait TableStore {
    fn create_table(&mut self, name: &str, schema: &[ColumnSchema]) -> Result<()>;

    /// Insert one batch, returning the number of records inserted.
    fn insert_batch(&mut self, name: &str, records: &[Record]) -> Result<usize>;
}

/// One failed chunk of a batched insertion.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ChunkFailure {
    /// Zero-based chunk index within the insertion.
    pub chunk: usize,
    pub reason: String,
}

/// Outcome of a batched insertion, per chunk.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct InsertReport {
    pub total_records: usize,
    pub inserted: usize,
    pub failures: Vec<ChunkFailure>,
}

impl InsertReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Insert records in fixed-size chunks, continuing past failed chunks.
pub fn insert_in_batches(
    store: &mut dyn TableStore,
    table: &str,
    records: &[Record],
    batch_size: usize,
) -> InsertReport {
    let batch_size = batch_size.max(1);
    let mut report = InsertReport {
        total_records: records.len(),
        ..InsertReport::default()
    };
    for (index, chunk) in records.chunks(batch_size).enumerate() {
        match store.insert_batch(table, chunk) {
            Ok(count) => report.inserted += count,
            Err(error) => {
                tracing::warn!(table, chunk = index, %error, "batch insert failed");
                report.failures.push(ChunkFailure {
                    chunk: index,
                    reason: error.to_string(),
                });
            }
        }
    }
    report
}

/// Render CREATE TABLE DDL for an inferred schema.
///
/// Adds the standard `id` identity key and `created_at` timestamp ahead of
/// the data columns. Advisory output: execution belongs to the store client.
pub fn create_table_sql(table: &str, schema: &[ColumnSchema]) -> String {
    let mut columns = vec![
        "id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY".to_string(),
        "created_at TIMESTAMP WITH TIME ZONE DEFAULT timezone('utc'::text, now())".to_string(),
    ];
    columns.extend(
        schema
            .iter()
            .map(|column| format!("\"{}\" {}", column.name, column.sql_type.as_sql())),
    );
    format!(
        "CREATE TABLE IF NOT EXISTS public.\"{table}\" (\n    {}\n);",
        columns.join(",\n    ")
    )
}

/// In-memory [`TableStore`] for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: BTreeMap<String, StoredTable>,
}

#[derive(Debug)]
struct StoredTable {
    schema: Vec<ColumnSchema>,
    records: Vec<Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self, name: &str) -> Option<&[Record]> {
        self.tables.get(name).map(|table| table.records.as_slice())
    }

    pub fn schema(&self, name: &str) -> Option<&[ColumnSchema]> {
        self.tables.get(name).map(|table| table.schema.as_slice())
    }
}

impl TableStore for MemoryStore {
    fn create_table(&mut self, name: &str, schema: &[ColumnSchema]) -> Result<()> {
        if self.tables.contains_key(name) {
            return Err(StoreError::TableExists(name.to_string()));
        }
        self.tables.insert(
            name.to_string(),
            StoredTable {
                schema: schema.to_vec(),
                records: Vec::new(),
            },
        );
        Ok(())
    }

    fn insert_batch(&mut self, name: &str, records: &[Record]) -> Result<usize> {
        let table = self
            .tables
            .get_mut(name)
            .ok_or_else(|| StoreError::UnknownTable(name.to_string()))?;
        table.records.extend_from_slice(records);
        Ok(records.len())
    }
}
