use crate::client::EfakClient;
use crate::queries::preview_message::pretty_preview;
use anyhow::Context;
use serde_json::Value;

#[tracing::instrument(skip(client))]
pub async fn preview_message(
    client: &EfakClient,
    topic: &str,
    partition: i32,
) -> Result<Option<String>, anyhow::Error> {
    let payload: Option<Value> = client
        .get_json(
            &["topic", "meta", "preview", "msg", "ajax"],
            &[("topic", topic.to_owned()), ("partition", partition.to_string())],
        )
        .await
        .with_context(|| format!("While fetching preview of topic {topic} partition {partition}"))?;

    payload.as_ref().map(pretty_preview).transpose()
}
