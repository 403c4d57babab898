use common::{
    ChartDescription, ChartLayout, ChartMargin, ChartSeries, DashboardMeta, DateRange, SeriesOption,
    SeriesPoint, ValueRange,
};
use dataset::SalesTable;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The observations table, loaded once at startup and read-only after
    pub table: Arc<SalesTable>,
    /// Cache for chart recomputations
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Chart(ChartDescription),
    Meta(DashboardMeta),
}

/// Query parameters for the chart endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChartQuery {
    /// Zero-based slider position into the sorted distinct store ids
    pub store_index: usize,
    /// Series columns to plot (comma-separated); defaults to Sales
    pub series: Option<String>,
}

impl ChartQuery {
    /// Splits the comma-separated series parameter, falling back to the
    /// default selection when absent or blank.
    pub fn selected_series(&self) -> Vec<String> {
        match &self.series {
            Some(series) if !series.trim().is_empty() => series
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            _ => vec![dataset::SALES_COLUMN.to_string()],
        }
    }
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Loaded dataset summary
    pub dataset: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::meta::get_dashboard_meta,
        crate::handlers::chart::get_chart,
    ),
    components(
        schemas(
            ApiResponse<DashboardMeta>,
            ApiResponse<ChartDescription>,
            ErrorResponse,
            HealthResponse,
            ChartQuery,
            ChartDescription,
            ChartSeries,
            SeriesPoint,
            ChartLayout,
            ChartMargin,
            DateRange,
            ValueRange,
            DashboardMeta,
            SeriesOption,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Dashboard metadata and chart endpoints"),
    ),
    info(
        title = "Storecast API",
        description = "Retail sales forecast dashboard - serves pre-computed store sales predictions as interactive charts",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    fn query(series: Option<&str>) -> ChartQuery {
        ChartQuery {
            store_index: 0,
            series: series.map(|s| s.to_string()),
        }
    }

    #[test]
    fn series_param_defaults_to_sales() {
        assert_eq!(query(None).selected_series(), vec!["Sales".to_string()]);
        assert_eq!(query(Some("  ")).selected_series(), vec!["Sales".to_string()]);
    }

    #[test]
    fn series_param_splits_on_commas() {
        assert_eq!(
            query(Some("Sales, Xgboost,LightGBM")).selected_series(),
            vec![
                "Sales".to_string(),
                "Xgboost".to_string(),
                "LightGBM".to_string()
            ]
        );
    }
}
