use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of every non 2xx response
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct APIErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_services: Option<Vec<Value>>,
}

impl APIErrorBody {
    pub fn new<T: Into<String>>(error: T) -> Self {
        Self {
            success: false,
            error: error.into(),
            invalid_services: None,
        }
    }
}
