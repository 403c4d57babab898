use anyhow::Result;
use dataset::SalesTable;
use moka::future::Cache;
use std::{sync::Arc, time::Duration};

use crate::schemas::AppState;

/// Initialize application state from the observations artifact.
///
/// A missing or malformed artifact is fatal: the error propagates to the
/// caller and the server never binds.
pub async fn initialize_app_state_with_path(data_path: &str) -> Result<AppState> {
    tracing::info!("Loading observations artifact: {}", data_path);
    let table = SalesTable::from_csv_path(data_path)?;

    // Initialize cache
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    Ok(AppState {
        table: Arc::new(table),
        cache,
    })
}
