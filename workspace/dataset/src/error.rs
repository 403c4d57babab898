use thiserror::Error;
use tracing::error;

/// Error types for dataset loading and validation
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Error reading the artifact from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// A required column is absent from the artifact
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A column has the wrong type for its role
    #[error("column '{column}' has type {actual}, expected {expected}")]
    ColumnType {
        column: String,
        expected: String,
        actual: String,
    },

    /// A column contains nulls; the artifact is expected to be complete
    #[error("column '{column}' contains {nulls} missing values")]
    MissingValues { column: String, nulls: usize },

    /// The artifact parsed but holds no rows
    #[error("observations table is empty")]
    Empty,

    /// Error from date operations
    #[error("date error: {0}")]
    Date(String),
}

impl From<polars::error::PolarsError> for DatasetError {
    fn from(error: polars::error::PolarsError) -> Self {
        let err = DatasetError::DataFrame(error.to_string());
        error!(?err, "DataFrame error");
        err
    }
}

/// Type alias for Result with DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
