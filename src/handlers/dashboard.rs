use axum::response::Html;
use tracing::instrument;

/// The single-page dashboard. All interactivity happens client-side
/// against the JSON API, so the page ships as one embedded document.
const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// Serve the dashboard page
#[utoipa::path(
    get,
    path = "/",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard page")
    )
)]
#[instrument]
pub async fn serve_dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
