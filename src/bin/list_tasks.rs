use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tasks::core::config::AppConfig;
use tasks::infrastructure::DynamoTaskStore;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tasks::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoTaskStore::new(aws_sdk_dynamodb::Client::new(&shared), config.table_name);
    info!(table = %store.table_name(), "List-tasks function initialized");

    let store = &store;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        tasks::api::handler(store, event).await
    }))
    .await
}
