use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(default)]
    pub x: Value,
    #[serde(default)]
    pub y: Value,
}

/// Parallel category and value arrays of one chart series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeriesData {
    pub name: String,
    pub categories: Vec<Value>,
    pub values: Vec<Value>,
}

impl ChartSeriesData {
    pub fn from_points(name: impl Into<String>, points: Vec<ChartPoint>) -> Self {
        let (categories, values) = points.into_iter().map(|p| (p.x, p.y)).unzip();
        Self {
            name: name.into(),
            categories,
            values,
        }
    }
}
