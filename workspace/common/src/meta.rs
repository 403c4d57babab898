use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::DateRange;

/// One entry of the multi-select series control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeriesOption {
    /// Text shown in the control
    pub label: String,
    /// Column name sent back in chart requests
    pub value: String,
}

impl SeriesOption {
    pub fn new(column: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            label: column.clone(),
            value: column,
        }
    }
}

/// Metadata the dashboard page needs to populate its controls: the slider
/// is bounded to `[0, store_count - 1]` and the multi-select lists every
/// plottable column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardMeta {
    pub store_count: usize,
    /// Options of the series multi-select, in table column order
    pub series: Vec<SeriesOption>,
    /// Initial selection of the multi-select
    pub default_series: Vec<String>,
    /// Full-table date bounds
    pub date_range: DateRange,
}
