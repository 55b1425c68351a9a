use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One table item as stored; field names map to arbitrary JSON values.
pub type Record = Map<String, Value>;

/// Result of a single scan request against the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    /// `None` when the store response carried no item list at all.
    pub items: Option<Vec<Record>>,
    /// The store reported more items beyond this page.
    pub truncated: bool,
}

/// Lambda proxy style response: `{"statusCode": .., "body": ".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct TasksBody<'a> {
    pub tasks: &'a [Record],
}
