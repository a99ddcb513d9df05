use crate::date_range::DateRange;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct GetProducerChartQuery {
    pub topic: String,
    pub range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProducerChartParams {
    pub stime: String,
    pub etime: String,
    pub topic: String,
}

impl From<&GetProducerChartQuery> for ProducerChartParams {
    fn from(value: &GetProducerChartQuery) -> Self {
        let (stime, etime) = value.range.compact_chart_params();
        Self {
            stime,
            etime,
            topic: value.topic.clone(),
        }
    }
}
