use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::scan::ScanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Failed to fetch tasks from DynamoDB: {0}")]
    StorageUnavailable(String),

    #[error("Failed to fetch tasks from DynamoDB: {0}")]
    Storage(String),

    #[error("Failed to serialize response: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TaskError {
    /// Whether the same request could succeed if tried again later.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, TaskError::StorageUnavailable(_))
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(error: serde_json::Error) -> Self {
        TaskError::Serialization(error.to_string())
    }
}

// Throttling, DynamoDB 5xx and transport failures are transient; everything
// else (missing table, validation, access denied) is not.
impl<R> From<SdkError<ScanError, R>> for TaskError
where
    R: std::fmt::Debug + 'static,
{
    fn from(error: SdkError<ScanError, R>) -> Self {
        let message = DisplayErrorContext(&error).to_string();

        match &error {
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
                TaskError::StorageUnavailable(message)
            }
            SdkError::ServiceError(ctx) => {
                let err = ctx.err();
                if err.is_provisioned_throughput_exceeded_exception()
                    || err.is_request_limit_exceeded()
                    || err.is_internal_server_error()
                {
                    TaskError::StorageUnavailable(message)
                } else {
                    TaskError::Storage(message)
                }
            }
            _ => TaskError::Storage(message),
        }
    }
}
