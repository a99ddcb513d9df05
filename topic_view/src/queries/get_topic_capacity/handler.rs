use crate::client::{EfakClient, NO_PARAMS};
use crate::queries::get_topic_capacity::TopicCapacity;
use anyhow::Context;

#[tracing::instrument(skip(client))]
pub async fn get_topic_capacity(
    client: &EfakClient,
    topic: &str,
) -> Result<Option<TopicCapacity>, anyhow::Error> {
    client
        .get_json(&["topic", "meta", "jmx", topic, "ajax"], &NO_PARAMS)
        .await
        .with_context(|| format!("While fetching capacity of topic {topic}"))
}
