use axum::{extract::State, http::StatusCode, response::Json};
use common::{DashboardMeta, SeriesOption};
use dataset::SALES_COLUMN;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState, CachedData};

/// Get the metadata the dashboard page uses to populate its controls
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/meta",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard metadata retrieved successfully", body = ApiResponse<DashboardMeta>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_dashboard_meta(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardMeta>>, StatusCode> {
    let cache_key = "dashboard_meta".to_string();

    // Check cache first
    if let Some(CachedData::Meta(meta)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: meta,
            message: "Dashboard metadata retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let table = &state.table;
    let meta = DashboardMeta {
        store_count: table.store_count(),
        series: table.columns().iter().map(SeriesOption::new).collect(),
        default_series: vec![SALES_COLUMN.to_string()],
        date_range: table.date_range(),
    };

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Meta(meta.clone()))
        .await;

    let response = ApiResponse {
        data: meta,
        message: "Dashboard metadata retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
