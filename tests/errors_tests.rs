use std::error::Error;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::types::error::{
    InternalServerError, ProvisionedThroughputExceededException, ResourceNotFoundException,
};
use tasks::errors::TaskError;

fn service_error(err: ScanError) -> TaskError {
    SdkError::<ScanError, ()>::service_error(err, ()).into()
}

#[test]
fn test_task_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = TaskError::Storage("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_task_error_display() {
    let error = TaskError::Storage("boom".to_string());
    assert_eq!(format!("{error}"), "Failed to fetch tasks from DynamoDB: boom");

    let error = TaskError::StorageUnavailable("timed out".to_string());
    assert_eq!(format!("{error}"), "Failed to fetch tasks from DynamoDB: timed out");

    let error = TaskError::Config("TASKS_TABLE_NAME: must not be empty".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: TASKS_TABLE_NAME: must not be empty"
    );
}

#[test]
fn test_only_unavailable_storage_is_retryable() {
    assert!(TaskError::StorageUnavailable(String::new()).is_retryable());
    assert!(!TaskError::Storage(String::new()).is_retryable());
    assert!(!TaskError::Serialization(String::new()).is_retryable());
    assert!(!TaskError::Config(String::new()).is_retryable());
}

#[test]
fn test_throttling_and_server_errors_are_unavailable() {
    let throttled = service_error(ScanError::ProvisionedThroughputExceededException(
        ProvisionedThroughputExceededException::builder()
            .message("slow down")
            .build(),
    ));
    assert!(matches!(throttled, TaskError::StorageUnavailable(_)));

    let internal = service_error(ScanError::InternalServerError(
        InternalServerError::builder().message("oops").build(),
    ));
    assert!(matches!(internal, TaskError::StorageUnavailable(_)));
}

#[test]
fn test_missing_table_is_a_storage_error() {
    let err = service_error(ScanError::ResourceNotFoundException(
        ResourceNotFoundException::builder()
            .message("Requested resource not found")
            .build(),
    ));

    match err {
        TaskError::Storage(msg) => assert!(msg.contains("Requested resource not found")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[test]
fn test_timeout_is_unavailable() {
    let err: TaskError = SdkError::<ScanError, ()>::timeout_error("deadline exceeded").into();
    assert!(err.is_retryable());
}

#[test]
fn test_serde_error_conversion() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: TaskError = parse_err.into();
    assert!(matches!(err, TaskError::Serialization(_)));
}
