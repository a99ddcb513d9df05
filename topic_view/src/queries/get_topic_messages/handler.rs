use crate::client::EfakClient;
use crate::envelope::TableEnvelope;
use crate::error::FetchError;
use crate::queries::get_topic_messages::{adapt_message_body, GetTopicMessagesQuery, MessageQueryParams};
use tracing::{debug, warn};

/// Message page of a topic; every failure degrades to an empty envelope.
#[tracing::instrument(skip_all, fields(topic = %query.topic, page = query.page.page_number()))]
pub async fn get_topic_messages(client: &EfakClient, query: &GetTopicMessagesQuery) -> TableEnvelope {
    match try_get_topic_messages(client, query).await {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("Message request for topic {} failed, {e}", query.topic);
            TableEnvelope::empty()
        }
    }
}

pub async fn try_get_topic_messages(
    client: &EfakClient,
    query: &GetTopicMessagesQuery,
) -> Result<TableEnvelope, FetchError> {
    let params = MessageQueryParams::from(query);
    debug!("Message query params: {params:?}");

    let body = client
        .get_text(&["topic", "message", query.topic.as_str(), "ajax"], &params)
        .await
        .map_err(FetchError::Transport)?;

    adapt_message_body(&query.topic, &body)
}
