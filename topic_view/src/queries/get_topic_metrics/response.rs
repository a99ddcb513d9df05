use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    pub mean_rate: String,
    pub one_minute: String,
    pub five_minute: String,
    pub fifteen_minute: String,
}

/// Metric bundle of the mbean endpoint, any metric may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicMBeans {
    pub msg: Option<MetricSample>,
    pub ins: Option<MetricSample>,
    pub out: Option<MetricSample>,
    pub rejected: Option<MetricSample>,
    pub fetch: Option<MetricSample>,
    pub produce: Option<MetricSample>,
    pub total_fetch_requests: Option<MetricSample>,
    pub total_produce_requests: Option<MetricSample>,
    pub produce_message_conversions: Option<MetricSample>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub label: &'static str,
    pub mean_rate: String,
    pub one_minute: String,
    pub five_minute: String,
    pub fifteen_minute: String,
}

impl TopicMBeans {
    /// Rows of the metric table in display order, absent metrics skipped.
    pub fn rows(&self) -> Vec<MetricRow> {
        [
            ("Messages in /sec", &self.msg),
            ("Bytes in /sec", &self.ins),
            ("Bytes out /sec", &self.out),
            ("Bytes rejected /sec", &self.rejected),
            ("Failed fetch request /sec", &self.fetch),
            ("Failed produce request /sec", &self.produce),
            ("Total fetch requests /sec", &self.total_fetch_requests),
            ("Total produce requests /sec", &self.total_produce_requests),
            (
                "Produce message conversions /sec",
                &self.produce_message_conversions,
            ),
        ]
        .into_iter()
        .filter_map(|(label, sample)| sample.as_ref().map(|x| MetricRow::new(label, x)))
        .collect()
    }
}

impl MetricRow {
    fn new(label: &'static str, sample: &MetricSample) -> Self {
        let keep_unit = label.to_uppercase().contains("BYTE");
        let shape = |value: &str| {
            if keep_unit {
                value.to_owned()
            } else {
                strip_byte_unit(value).to_owned()
            }
        };

        Self {
            label,
            mean_rate: shape(&sample.mean_rate),
            one_minute: shape(&sample.one_minute),
            five_minute: shape(&sample.five_minute),
            fifteen_minute: shape(&sample.fifteen_minute),
        }
    }
}

fn strip_byte_unit(value: &str) -> &str {
    value.split('B').next().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(value: &str) -> MetricSample {
        MetricSample {
            mean_rate: value.to_owned(),
            one_minute: value.to_owned(),
            five_minute: value.to_owned(),
            fifteen_minute: value.to_owned(),
        }
    }

    #[test]
    fn byte_metrics_keep_unit_and_counts_lose_it() {
        let mbeans = TopicMBeans {
            msg: Some(sample("12.50B/s")),
            ins: Some(sample("3.20KB/s")),
            ..Default::default()
        };

        let rows = mbeans.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Messages in /sec");
        assert_eq!(rows[0].mean_rate, "12.50");
        assert_eq!(rows[1].label, "Bytes in /sec");
        assert_eq!(rows[1].fifteen_minute, "3.20KB/s");
    }

    #[test]
    fn missing_metrics_are_skipped_in_order() {
        let mbeans: TopicMBeans = serde_json::from_str(
            r#"{
                "produce_message_conversions": {"meanRate": "1", "oneMinute": "2", "fiveMinute": "3", "fifteenMinute": "4"},
                "rejected": {"meanRate": "0B/s", "oneMinute": "0B/s", "fiveMinute": "0B/s", "fifteenMinute": "0B/s"}
            }"#,
        )
        .unwrap();

        let labels: Vec<_> = mbeans.rows().iter().map(|x| x.label).collect();
        assert_eq!(
            labels,
            vec!["Bytes rejected /sec", "Produce message conversions /sec"]
        );
        assert_eq!(mbeans.rows()[1].five_minute, "3");
    }
}
