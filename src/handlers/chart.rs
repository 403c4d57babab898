use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::ChartDescription;
use compute::ComputeError;
use tracing::{instrument, warn};

use crate::schemas::{ApiResponse, AppState, CachedData, ChartQuery};

/// Get the chart description for one store/series selection
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/chart",
    tag = "dashboard",
    params(
        ("store_index" = usize, Query, description = "Zero-based slider position into the sorted distinct store ids"),
        ("series" = Option<String>, Query, description = "Comma-separated series columns to plot; defaults to Sales"),
    ),
    responses(
        (status = 200, description = "Chart retrieved successfully", body = ApiResponse<ChartDescription>),
        (status = 400, description = "Unknown series column", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Store index out of range", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_chart(
    Query(query): Query<ChartQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ChartDescription>>, StatusCode> {
    let selected = query.selected_series();

    // Check cache first
    let cache_key = format!("chart_{}_{:?}", query.store_index, selected);
    if let Some(CachedData::Chart(chart)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: chart,
            message: "Chart retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    // Recompute the chart for this selection
    let chart = match compute::build_chart(&state.table, query.store_index, &selected) {
        Ok(chart) => chart,
        Err(err @ ComputeError::StoreIndexOutOfRange { .. }) => {
            warn!("Rejected chart request: {}", err);
            return Err(StatusCode::NOT_FOUND);
        }
        Err(err @ ComputeError::UnknownColumn(_)) => {
            warn!("Rejected chart request: {}", err);
            return Err(StatusCode::BAD_REQUEST);
        }
        Err(_) => {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Chart(chart.clone()))
        .await;

    let response = ApiResponse {
        data: chart,
        message: "Chart retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
