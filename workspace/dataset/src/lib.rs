//! The data layer: loads the serialized observations artifact into a
//! polars frame once at startup, validates its schema, and precomputes
//! the metadata the dashboard needs to bound its controls.

pub mod error;
pub mod table;
pub mod testing;

pub use error::{DatasetError, Result};
pub use table::{date_at, SalesTable};

/// Categorical store identifier column.
pub const STORE_COLUMN: &str = "Store";
/// Time index column.
pub const DATE_COLUMN: &str = "Date";
/// Observed sales column; also keys the chart's y-axis range.
pub const SALES_COLUMN: &str = "Sales";
