use crate::utils::value_to_u64;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Paged response shape consumed by the table views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEnvelope<T = Value> {
    #[serde(rename = "sEcho", default)]
    pub echo: Value,
    #[serde(rename = "iTotalRecords", default)]
    pub total_records: u64,
    #[serde(rename = "iTotalDisplayRecords", default)]
    pub total_display_records: u64,
    #[serde(rename = "aaData", default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> TableEnvelope<T> {
    pub fn empty() -> Self {
        Self::with_rows(0, Vec::new())
    }

    pub fn with_rows(total: u64, data: Vec<T>) -> Self {
        Self {
            echo: Value::from(0),
            total_records: total,
            total_display_records: total,
            data,
        }
    }
}

/// Rows of a forwarded table page. A missing or non-array `aaData` has no rows.
pub fn table_rows(page: &Value) -> &[Value] {
    page.get("aaData")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// `iTotalDisplayRecords` of a forwarded table page, numeric strings included.
pub fn table_display_total(page: &Value) -> u64 {
    page.get("iTotalDisplayRecords")
        .and_then(value_to_u64)
        .unwrap_or_default()
}
