//! Tasks - AWS Lambda functions that expose a DynamoDB task table as JSON.
//!
//! The crate ships two Lambda binaries:
//! 1. `list-tasks` scans the tasks table and returns every item under `"tasks"`
//! 2. `hello` returns a fixed greeting and is used to check deployment wiring
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - DynamoDB as the task store, behind the [`core::TaskStore`] trait
//! - Tokio for async runtime
//!
//! The DynamoDB client is built once per process and passed into the handler,
//! so warm invocations reuse it.
//!
//! # Example
//!
//! ```no_run
//! use tasks::core::config::AppConfig;
//! use tasks::infrastructure::DynamoTaskStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     tasks::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//!     let store = DynamoTaskStore::new(aws_sdk_dynamodb::Client::new(&shared), config.table_name);
//!
//!     let response = tasks::api::handler::handle_list_tasks(&store).await;
//!     println!("{} {}", response.status_code, response.body);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod hello;
pub mod infrastructure;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The filter is read from `RUST_LOG` and falls
/// back to `info,tasks=debug`. Calling it again after a subscriber is installed
/// has no effect.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// tasks::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tasks=debug"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
