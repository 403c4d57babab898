use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from the dataset layer
    #[error("Dataset error: {0}")]
    Dataset(#[from] dataset::DatasetError),

    /// Store index outside the table's distinct-store range
    #[error("store index {index} is out of range for {store_count} stores")]
    StoreIndexOutOfRange { index: usize, store_count: usize },

    /// Selected series that is not a plottable column of the table
    #[error("unknown series column '{0}'")]
    UnknownColumn(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        let compute_error = match error {
            polars::error::PolarsError::NoData(_) => {
                let err = ComputeError::DataFrame(format!("No data: {}", error));
                error!(?err, "DataFrame error: No data");
                err
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Shape mismatch: {}", error));
                error!(?err, "DataFrame error: Shape mismatch");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            polars::error::PolarsError::ComputeError(_) => {
                let err = ComputeError::DataFrame(format!("Compute error: {}", error));
                error!(?err, "DataFrame error: Compute error");
                err
            }
            polars::error::PolarsError::OutOfBounds(_) => {
                let err = ComputeError::DataFrame(format!("Out of bounds: {}", error));
                error!(?err, "DataFrame error: Out of bounds");
                err
            }
            _ => {
                let err = ComputeError::Series(format!("Series error: {}", error));
                error!(?err, "Series error");
                err
            }
        };
        compute_error
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
