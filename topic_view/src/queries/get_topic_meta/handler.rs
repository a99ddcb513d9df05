use crate::client::EfakClient;
use crate::queries::get_topic_meta::GetTopicMetaQuery;
use crate::queries::table_page::fetch_table_page;
use anyhow::Context;
use serde_json::Value;

/// Partition metadata page, forwarded as the server sends it.
#[tracing::instrument(skip_all, fields(topic = %query.topic))]
pub async fn get_topic_meta(
    client: &EfakClient,
    query: &GetTopicMetaQuery,
) -> Result<Value, anyhow::Error> {
    fetch_table_page(
        client,
        &["topic", "meta", query.topic.as_str(), "ajax"],
        &query.descriptor,
    )
    .await
    .with_context(|| format!("While fetching metadata of topic {}", query.topic))
}
