//! List-tasks Lambda handler.
//!
//! Scans the tasks table through the injected [`TaskStore`] and wraps the
//! result in a proxy response. Every failure is logged and reported to the
//! caller only as a generic 500.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::response;
use crate::core::models::ApiResponse;
use crate::core::store::TaskStore;
use crate::core::tasks::list_tasks;
use crate::errors::TaskError;

/// Lambda handler for the list-tasks entrypoint.
///
/// The event payload is not inspected.
///
/// # Errors
///
/// Never returns `Err` for storage or encoding failures; those become a 500
/// response instead.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    store: &dyn TaskStore,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    #[cfg(feature = "debug-logs")]
    tracing::debug!("Received event: {}", event.payload);

    #[cfg(not(feature = "debug-logs"))]
    tracing::debug!(
        "Received event: [... payload masked, enable debug-logs feature to view full event ...]"
    );

    Ok(handle_list_tasks(store).await)
}

/// Fetches all tasks and builds the response envelope.
pub async fn handle_list_tasks(store: &dyn TaskStore) -> ApiResponse {
    match fetch_tasks_response(store).await {
        Ok(response) => response,
        Err(e) => {
            error!(retryable = e.is_retryable(), "Unexpected error occurred: {}", e);
            response::err_response(500, response::GENERIC_ERROR_MESSAGE)
        }
    }
}

async fn fetch_tasks_response(store: &dyn TaskStore) -> Result<ApiResponse, TaskError> {
    let tasks = list_tasks(store).await?;

    #[cfg(feature = "debug-logs")]
    info!("Get Task List: {:?}", tasks);

    #[cfg(not(feature = "debug-logs"))]
    info!("Get Task List: {} tasks", tasks.len());

    response::ok_tasks(&tasks)
}
