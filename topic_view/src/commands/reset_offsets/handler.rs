use crate::client::EfakClient;
use crate::commands::reset_offsets::{ExecuteEnvelope, ResetCommand, ResetOutcome};
use anyhow::Context;
use tracing::info;

#[tracing::instrument(skip_all, fields(group = %command.group, topic = %command.topic))]
pub async fn reset_offsets(
    client: &EfakClient,
    command: &ResetCommand,
) -> Result<ResetOutcome, anyhow::Error> {
    let envelope = ExecuteEnvelope::try_from(command)?;
    info!("Executing offset reset {}", envelope.json);

    let outcome: Option<ResetOutcome> = client
        .post_json(
            &["topic", "reset", "offsets", "execute", "result", "ajax"],
            &envelope,
        )
        .await
        .with_context(|| {
            format!(
                "While resetting offsets of group {} on topic {}",
                command.group, command.topic
            )
        })?;

    Ok(outcome.unwrap_or_default())
}
