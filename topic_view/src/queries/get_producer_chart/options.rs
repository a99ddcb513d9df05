use crate::queries::get_producer_chart::ChartSeriesData;
use serde::Serialize;
use serde_json::Value;

const PRODUCER_CHART_COLOR: &str = "#3461ff";

/// Full configuration of the producer chart, rebuilt on every update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub series: Vec<ChartSeries>,
    pub chart: ChartFrame,
    pub colors: Vec<String>,
    pub stroke: ChartStroke,
    pub fill: ChartFill,
    pub data_labels: Enabled,
    pub legend: Toggle,
    pub xaxis: ChartXAxis,
    pub tooltip: ChartTooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    #[serde(rename = "type")]
    pub kind: String,
    pub stacked: bool,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStroke {
    pub show: bool,
    pub width: Vec<f64>,
    pub curve: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFill {
    #[serde(rename = "type")]
    pub kind: String,
    pub opacity_from: f64,
    pub opacity_to: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toggle {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enabled {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartXAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub categories: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTooltip {
    pub theme: String,
    pub x_format: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            series: vec![ChartSeries {
                name: String::new(),
                data: Vec::new(),
            }],
            chart: ChartFrame {
                kind: "area".to_owned(),
                stacked: true,
                height: 280,
            },
            colors: vec![PRODUCER_CHART_COLOR.to_owned()],
            stroke: ChartStroke {
                show: true,
                width: vec![2.5],
                curve: "smooth".to_owned(),
            },
            fill: ChartFill {
                kind: "gradient".to_owned(),
                opacity_from: 0.5,
                opacity_to: 0.1,
            },
            data_labels: Enabled { enabled: false },
            legend: Toggle { show: false },
            xaxis: ChartXAxis {
                kind: "datetime".to_owned(),
                categories: Vec::new(),
            },
            tooltip: ChartTooltip {
                theme: "dark".to_owned(),
                x_format: "yyyy-MM-dd HH:mm".to_owned(),
            },
        }
    }
}

impl ChartOptions {
    /// New options carrying the given series, everything else taken from `self`.
    pub fn with_series(&self, data: ChartSeriesData) -> Self {
        Self {
            series: vec![ChartSeries {
                name: data.name,
                data: data.values,
            }],
            xaxis: ChartXAxis {
                categories: data.categories,
                ..self.xaxis.clone()
            },
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::get_producer_chart::ChartPoint;
    use serde_json::json;

    #[test]
    fn series_replaces_data_and_keeps_style() {
        let base = ChartOptions::default();
        let points = vec![
            ChartPoint {
                x: json!("2024-01-15 09:00"),
                y: json!(10),
            },
            ChartPoint {
                x: json!("2024-01-15 09:05"),
                y: json!(12),
            },
        ];

        let updated = base.with_series(ChartSeriesData::from_points("orders", points));

        assert_eq!(updated.series.len(), 1);
        assert_eq!(updated.series[0].name, "orders");
        assert_eq!(updated.series[0].data, vec![json!(10), json!(12)]);
        assert_eq!(
            updated.xaxis.categories,
            vec![json!("2024-01-15 09:00"), json!("2024-01-15 09:05")]
        );
        assert_eq!(updated.chart, base.chart);
        assert!(base.xaxis.categories.is_empty());
    }

    #[test]
    fn serializes_with_chart_field_names() {
        let json = serde_json::to_value(ChartOptions::default()).unwrap();
        assert_eq!(json["chart"]["type"], json!("area"));
        assert_eq!(json["xaxis"]["type"], json!("datetime"));
        assert_eq!(json["dataLabels"]["enabled"], json!(false));
        assert_eq!(json["fill"]["opacityFrom"], json!(0.5));
    }
}
