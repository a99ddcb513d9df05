use crate::client::EfakClient;
use crate::queries::get_producer_chart::{
    ChartPoint, ChartSeriesData, GetProducerChartQuery, ProducerChartParams,
};
use anyhow::Context;
use tracing::debug;

/// Producer throughput series of a topic, `None` when the server has nothing to show.
#[tracing::instrument(skip_all, fields(topic = %query.topic))]
pub async fn get_producer_chart(
    client: &EfakClient,
    query: &GetProducerChartQuery,
) -> Result<Option<ChartSeriesData>, anyhow::Error> {
    let params = ProducerChartParams::from(query);
    let points: Option<Vec<ChartPoint>> = client
        .get_json_uncached(&["topic", "producer", "chart", "ajax"], &params)
        .await
        .with_context(|| format!("While fetching producer chart of topic {}", query.topic))?;

    let Some(points) = points else {
        debug!("Producer chart response is empty");
        return Ok(None);
    };

    debug!("Got {} producer chart points", points.len());
    Ok(Some(ChartSeriesData::from_points(&query.topic, points)))
}
