use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::api::response;
use crate::core::models::ApiResponse;

/// Greeting returned by every invocation.
pub const GREETING: &str = "Hello, World! by SAM";

/// Returns the fixed greeting and echoes the invocation to the log.
///
/// # Errors
///
/// This handler does not fail.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    let (payload, context) = event.into_parts();

    info!("Running test function");

    #[cfg(feature = "debug-logs")]
    info!("Event: {}", payload);

    #[cfg(not(feature = "debug-logs"))]
    info!(
        fields = payload.as_object().map_or(0, serde_json::Map::len),
        "Event: [... payload masked, enable debug-logs feature to view full event ...]"
    );

    info!(
        request_id = %context.request_id,
        function_arn = %context.invoked_function_arn,
        deadline_ms = context.deadline,
        "Context"
    );

    Ok(response::ok_message(GREETING))
}
