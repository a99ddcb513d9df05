use crate::utils::display_value;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopicCapacity {
    #[serde(default)]
    pub logsize: Value,
    #[serde(default)]
    pub topicsize: Value,
    #[serde(default)]
    pub sizetype: Value,
}

impl TopicCapacity {
    pub fn log_size_label(&self) -> String {
        display_value(&self.logsize)
    }

    /// Capacity as shown on the page, e.g. `1.5 (GB)`.
    pub fn capacity_label(&self) -> String {
        format!(
            "{} ({})",
            display_value(&self.topicsize),
            display_value(&self.sizetype)
        )
    }
}
