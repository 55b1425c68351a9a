//! DynamoDB-backed [`TaskStore`].

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::operation::scan::ScanOutput;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Number, Value};
use tracing::debug;

use crate::core::models::{Record, ScanPage};
use crate::core::store::TaskStore;
use crate::errors::TaskError;

#[derive(Debug, Clone)]
pub struct DynamoTaskStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoTaskStore {
    #[must_use]
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TaskStore for DynamoTaskStore {
    async fn scan(&self) -> Result<ScanPage, TaskError> {
        debug!(table = %self.table_name, "Scanning table");

        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await?;

        Ok(page_from_output(output))
    }
}

/// Maps one scan response onto a [`ScanPage`].
#[must_use]
pub fn page_from_output(output: ScanOutput) -> ScanPage {
    ScanPage {
        items: output
            .items
            .map(|items| items.into_iter().map(item_to_record).collect()),
        truncated: output.last_evaluated_key.is_some(),
    }
}

/// Converts a raw DynamoDB item into a JSON record.
#[must_use]
pub fn item_to_record(item: HashMap<String, AttributeValue>) -> Record {
    item.into_iter()
        .map(|(name, value)| (name, attribute_to_json(value)))
        .collect()
}

/// Converts one attribute to its JSON counterpart.
///
/// Sets become arrays, binaries become base64 strings, and attribute types
/// this SDK version does not know about become `null`.
#[must_use]
pub fn attribute_to_json(value: AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::L(list) => {
            Value::Array(list.into_iter().map(attribute_to_json).collect())
        }
        AttributeValue::M(map) => Value::Object(item_to_record(map)),
        AttributeValue::Ss(set) => Value::Array(set.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(set.into_iter().map(number_to_json).collect()),
        AttributeValue::Bs(set) => Value::Array(
            set.into_iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        _ => Value::Null,
    }
}

// DynamoDB numbers travel as strings with up to 38 digits of precision; the
// digits are kept verbatim (serde_json `arbitrary_precision`).
fn number_to_json(n: String) -> Value {
    match n.parse::<Number>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(n),
    }
}
