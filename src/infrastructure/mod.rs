//! Adapters to external services.

pub mod dynamodb;

pub use dynamodb::DynamoTaskStore;
