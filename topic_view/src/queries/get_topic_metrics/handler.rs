use crate::client::{EfakClient, NO_PARAMS};
use crate::queries::get_topic_metrics::{MetricRow, TopicMBeans};
use anyhow::Context;

#[tracing::instrument(skip(client))]
pub async fn get_topic_metrics(
    client: &EfakClient,
    topic: &str,
) -> Result<Vec<MetricRow>, anyhow::Error> {
    let mbeans: Option<TopicMBeans> = client
        .get_json(&["topic", "meta", "mbean", topic, "ajax"], &NO_PARAMS)
        .await
        .with_context(|| format!("While fetching metrics of topic {topic}"))?;

    Ok(mbeans.map(|x| x.rows()).unwrap_or_default())
}
