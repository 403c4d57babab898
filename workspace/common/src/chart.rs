use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One (date, value) point on a chart line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A named line series, points in row time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSeries {
    /// Series name shown in the legend (the source column name)
    pub name: String,
    /// Ordered (date, value) pairs
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Inclusive date bounds, used as the x-axis range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Inclusive numeric bounds, used as the y-axis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Pixel margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChartMargin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

/// Rendering cosmetics the chart layer applies as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartLayout {
    /// Line colors assigned to series in order
    pub colorway: Vec<String>,
    /// Plot area background color
    pub plot_background: String,
    /// Hover behavior ("x" compares all series at the hovered date)
    pub hover_mode: String,
    pub margin: ChartMargin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            colorway: [
                "#000000", "#FF4F00", "#375CB1", "#FF7400", "#FFF400", "#FF0056",
            ]
            .iter()
            .map(|c| (*c).to_string())
            .collect(),
            plot_background: "#FAFAFA".to_string(),
            hover_mode: "x".to_string(),
            margin: ChartMargin {
                top: 50,
                bottom: 50,
                left: 100,
                right: 50,
            },
        }
    }
}

/// Everything the rendering layer needs to draw one chart: the line
/// series for the current selection plus axis and layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartDescription {
    /// Chart title, includes the resolved store identifier
    pub title: String,
    /// One series per selected column, in selection order
    pub series: Vec<ChartSeries>,
    pub x_title: String,
    pub y_title: String,
    /// Full-table date bounds, stable across store switches
    pub x_range: DateRange,
    /// Sales bounds of the selected store, padded
    pub y_range: ValueRange,
    pub layout: ChartLayout,
}
