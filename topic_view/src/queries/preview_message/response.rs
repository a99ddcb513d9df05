use anyhow::Context;
use serde_json::Value;

/// Pretty prints a preview payload with two-space indentation.
pub fn pretty_preview(payload: &Value) -> Result<String, anyhow::Error> {
    serde_json::to_string_pretty(payload).context("While formatting preview payload")
}
