use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Parsed body of the DexScreener tokens endpoint. Its shape belongs to the
/// API, so it is kept as an untyped document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMarketResponse(Value);

impl RawMarketResponse {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn document(&self) -> &Value {
        &self.0
    }

    /// The `pairs` list, in the order the API returned it.
    pub fn pairs(&self) -> Result<&[Value]> {
        match self.0.get("pairs") {
            Some(Value::Array(pairs)) => Ok(pairs.as_slice()),
            Some(other) => Err(Error::MalformedDataError(format!(
                "expected `pairs` to be a list, found {}",
                kind(other)
            ))),
            None => Err(Error::MalformedDataError("missing `pairs` list".into())),
        }
    }
}

impl From<Value> for RawMarketResponse {
    fn from(document: Value) -> Self {
        Self(document)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    pub name: String,
    #[serde(rename = "ca")]
    pub contract_address: String,
    pub description: String,
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
