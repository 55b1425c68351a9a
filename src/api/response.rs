//! Response builders shared by the handlers.

use serde::Serialize;

use crate::core::models::{ApiResponse, Record, TasksBody};
use crate::errors::TaskError;

/// Message returned to callers for every internal failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Returns a response whose body is the JSON encoding of `body`.
///
/// # Errors
///
/// Returns [`TaskError::Serialization`] if `body` cannot be encoded.
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Result<ApiResponse, TaskError> {
    Ok(ApiResponse {
        status_code,
        body: serde_json::to_string(body)?,
    })
}

/// Returns a 200 response carrying `{"tasks": [...]}`.
///
/// # Errors
///
/// Returns [`TaskError::Serialization`] if a record cannot be encoded.
pub fn ok_tasks(tasks: &[Record]) -> Result<ApiResponse, TaskError> {
    json_response(200, &TasksBody { tasks })
}

/// Returns a 200 response carrying `{"message": ...}`.
#[must_use]
pub fn ok_message(message: &str) -> ApiResponse {
    ApiResponse {
        status_code: 200,
        body: serde_json::json!({ "message": message }).to_string(),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> ApiResponse {
    ApiResponse {
        status_code,
        body: serde_json::json!({ "error": message }).to_string(),
    }
}
