use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("row {row} does not match the dataset columns: {detail}")]
    RowShape { row: usize, detail: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
