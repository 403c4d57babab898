use std::path::Path;

use chrono::NaiveDate;
use common::DateRange;
use polars::prelude::*;
use tracing::{debug, info, instrument};

use crate::error::{DatasetError, Result};
use crate::{DATE_COLUMN, SALES_COLUMN, STORE_COLUMN};

/// Days from 0001-01-01 (CE) to 1970-01-01, the epoch polars dates count from.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// The load-once observations table plus metadata derived from it.
///
/// Construction validates the artifact and normalizes it: rows are stably
/// sorted by date, the store column is widened to `Int64` and every
/// plottable column to `Float64`. The frame is never mutated afterwards,
/// so it can be shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct SalesTable {
    df: DataFrame,
    stores: Vec<i64>,
    columns: Vec<String>,
    date_range: DateRange,
}

impl SalesTable {
    /// Reads the observations artifact from a CSV file.
    ///
    /// The file must carry a header row; the date column is parsed during
    /// the read. Any failure here is fatal to startup.
    #[instrument]
    pub fn from_csv_path(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self> {
        let path = path.as_ref();
        std::fs::metadata(path)?;
        info!("Reading observations table from {}", path.display());

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        Self::from_dataframe(df)
    }

    /// Validates and normalizes an already-loaded frame.
    pub fn from_dataframe(df: DataFrame) -> Result<Self> {
        if df.height() == 0 {
            return Err(DatasetError::Empty);
        }

        for required in [STORE_COLUMN, DATE_COLUMN, SALES_COLUMN] {
            if df.column(required).is_err() {
                return Err(DatasetError::MissingColumn(required.to_string()));
            }
        }

        let date_dtype = df.column(DATE_COLUMN)?.dtype().clone();
        if date_dtype != DataType::Date {
            return Err(DatasetError::ColumnType {
                column: DATE_COLUMN.to_string(),
                expected: "Date".to_string(),
                actual: date_dtype.to_string(),
            });
        }

        let store_dtype = df.column(STORE_COLUMN)?.dtype().clone();
        if !is_integer_dtype(&store_dtype) {
            return Err(DatasetError::ColumnType {
                column: STORE_COLUMN.to_string(),
                expected: "integer".to_string(),
                actual: store_dtype.to_string(),
            });
        }

        // Plottable columns are everything except the identifier and the
        // time index, in table order. They must be numeric and complete.
        let mut columns = Vec::new();
        for column in df.get_columns() {
            let name = column.name().as_str();
            if column.null_count() > 0 {
                return Err(DatasetError::MissingValues {
                    column: name.to_string(),
                    nulls: column.null_count(),
                });
            }
            if name == STORE_COLUMN || name == DATE_COLUMN {
                continue;
            }
            if !is_numeric_dtype(column.dtype()) {
                return Err(DatasetError::ColumnType {
                    column: name.to_string(),
                    expected: "numeric".to_string(),
                    actual: column.dtype().to_string(),
                });
            }
            columns.push(name.to_string());
        }

        let mut casts = vec![col(STORE_COLUMN).cast(DataType::Int64)];
        casts.extend(
            columns
                .iter()
                .map(|name| col(name.as_str()).cast(DataType::Float64)),
        );

        let df = df
            .lazy()
            .with_columns(casts)
            .sort(
                [DATE_COLUMN],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()?;

        let mut stores: Vec<i64> = df
            .column(STORE_COLUMN)?
            .i64()?
            .into_no_null_iter()
            .collect();
        stores.sort_unstable();
        stores.dedup();

        let date_col = df.column(DATE_COLUMN)?;
        let date_range = DateRange::new(date_at(date_col, 0)?, date_at(date_col, df.height() - 1)?);

        info!(
            "Loaded observations table: {} rows, {} stores, {} plottable columns",
            df.height(),
            stores.len(),
            columns.len()
        );
        debug!(
            "Plottable columns: {:?}; dates {} to {}",
            columns, date_range.start, date_range.end
        );

        Ok(Self {
            df,
            stores,
            columns,
            date_range,
        })
    }

    /// Distinct store identifiers, sorted ascending.
    pub fn stores(&self) -> &[i64] {
        &self.stores
    }

    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// Resolves a zero-based slider index to a store identifier.
    pub fn resolve_store(&self, index: usize) -> Option<i64> {
        self.stores.get(index).copied()
    }

    /// Plottable column names (everything except `Store` and `Date`),
    /// in table order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Full-table date bounds.
    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    /// The underlying frame, sorted by date.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }
}

/// Reads one value of a date column as a `NaiveDate`.
pub fn date_at(column: &Column, index: usize) -> Result<NaiveDate> {
    match column.get(index)? {
        AnyValue::Date(days) => NaiveDate::from_num_days_from_ce_opt(days + EPOCH_DAYS_FROM_CE)
            .ok_or_else(|| DatasetError::Date(format!("day offset {days} is out of range"))),
        other => Err(DatasetError::Date(format!(
            "expected a date at row {index}, got {other}"
        ))),
    }
}

fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    is_integer_dtype(dtype) || matches!(dtype, DataType::Float32 | DataType::Float64)
}
