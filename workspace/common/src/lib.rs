//! Common transport-layer types shared between the backend and the
//! rendering layer. These structs mirror the dashboard API's response
//! payloads so the page script (and the tests) consume the exact shapes
//! the handlers produce.

mod chart;
mod meta;

pub use chart::{
    ChartDescription, ChartLayout, ChartMargin, ChartSeries, DateRange, SeriesPoint, ValueRange,
};
pub use meta::{DashboardMeta, SeriesOption};
