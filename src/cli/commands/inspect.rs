use anyhow::Result;
use dataset::SalesTable;
use tracing::{debug, error, info, trace};

pub fn inspect(data_path: &str) -> Result<()> {
    trace!("Entering inspect function");
    info!("Inspecting observations artifact");
    debug!("Artifact path: {}", data_path);

    let table = match SalesTable::from_csv_path(data_path) {
        Ok(table) => {
            info!("Artifact loaded and validated successfully");
            table
        }
        Err(e) => {
            error!("Failed to load artifact '{}': {}", data_path, e);
            return Err(e.into());
        }
    };

    let range = table.date_range();
    println!("rows:    {}", table.height());
    if let (Some(first), Some(last)) = (table.stores().first(), table.stores().last()) {
        println!("stores:  {} (ids {} to {})", table.store_count(), first, last);
    }
    println!("columns: {}", table.columns().join(", "));
    println!("dates:   {} to {}", range.start, range.end);

    trace!("inspect function completed");
    Ok(())
}
