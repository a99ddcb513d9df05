use crate::envelope::TableEnvelope;
use crate::error::FetchError;
use crate::utils::value_to_u64;
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One sampled message row as shown in the message table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRow {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub partition: Value,
    #[serde(default)]
    pub offset: Value,
    #[serde(rename = "msg", default)]
    pub message: Value,
    #[serde(default)]
    pub timespan: Value,
    #[serde(default)]
    pub date: Value,
}

impl MessageRow {
    pub fn from_row(row: &Value) -> Result<Self, anyhow::Error> {
        Self::deserialize(row).context("While reading message row")
    }
}

/// Shapes a message endpoint body into a table envelope, tagging every row with the topic.
pub fn adapt_message_body(topic: &str, body: &str) -> Result<TableEnvelope, FetchError> {
    let mut data: Value = serde_json::from_str(body)
        .context("While parsing message response")
        .map_err(FetchError::Parse)?;

    // the server may send the payload as a JSON encoded string
    if let Value::String(inner) = &data {
        data = serde_json::from_str(inner)
            .context("While parsing inner message response")
            .map_err(FetchError::Parse)?;
    }

    let Value::Object(mut data) = data else {
        return Err(FetchError::Parse(anyhow!(
            "Message response isn't a JSON object"
        )));
    };

    let total = data.get("total").and_then(value_to_u64).unwrap_or_default();
    let mut messages = match data.remove("message") {
        Some(Value::Array(messages)) => messages,
        _ => Vec::new(),
    };

    for message in messages.iter_mut() {
        if let Value::Object(row) = message {
            row.insert("topic".to_owned(), Value::String(topic.to_owned()));
        }
    }

    Ok(TableEnvelope::with_rows(total, messages))
}
