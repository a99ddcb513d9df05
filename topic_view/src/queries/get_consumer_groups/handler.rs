use crate::client::EfakClient;
use crate::queries::get_consumer_groups::GetConsumerGroupsQuery;
use crate::queries::table_page::fetch_table_page;
use anyhow::Context;
use serde_json::Value;

#[tracing::instrument(skip_all, fields(topic = %query.topic))]
pub async fn get_consumer_groups(
    client: &EfakClient,
    query: &GetConsumerGroupsQuery,
) -> Result<Value, anyhow::Error> {
    fetch_table_page(
        client,
        &["topic", "consumer", "group", query.topic.as_str(), "ajax"],
        &query.descriptor,
    )
    .await
    .with_context(|| format!("While fetching consumer group lags of topic {}", query.topic))
}
