use crate::handlers::{
    chart::get_chart, dashboard::serve_dashboard, health::health_check, meta::get_dashboard_meta,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Dashboard page
        .route("/", get(serve_dashboard))
        // Health check
        .route("/health", get(health_check))
        // API v1 routes
        .route("/api/v1/dashboard/meta", get(get_dashboard_meta))
        .route("/api/v1/dashboard/chart", get(get_chart))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
