use lambda_runtime::{Error, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tasks::setup_logging();
    lambda_runtime::run(service_fn(tasks::hello::handler)).await
}
