use tracing::{debug, error, info, warn};

use super::models::Record;
use super::store::TaskStore;
use crate::errors::TaskError;

/// Fetches every task in the store.
///
/// Only the first scan page is read. When the store reports more data a
/// warning is logged and the partial list is still returned.
///
/// # Errors
///
/// Returns the store's error, with its kind intact, after logging it.
pub async fn list_tasks(store: &dyn TaskStore) -> Result<Vec<Record>, TaskError> {
    info!("Starting to fetch tasks from DynamoDB");

    let page = store.scan().await.inspect_err(|e| {
        error!(retryable = e.is_retryable(), "{}", e);
    })?;

    let tasks = page.items.unwrap_or_default();
    if page.truncated {
        warn!(
            returned = tasks.len(),
            "Scan result was truncated; remaining pages were not fetched"
        );
    }

    debug!(count = tasks.len(), "Success to get Tasks list");
    Ok(tasks)
}
