use crate::client::EfakClient;
use crate::envelope::table_rows;
use crate::paging::TableDescriptor;
use anyhow::Context;
use serde_json::Value;
use tracing::debug;

/// Fetches a server-side table page and hands back the response untouched.
pub(crate) async fn fetch_table_page(
    client: &EfakClient,
    segments: &[&str],
    descriptor: &TableDescriptor,
) -> Result<Value, anyhow::Error> {
    let ao_data = descriptor.to_query_value()?;
    let page: Value = client
        .get_json(segments, &[("aoData", ao_data)])
        .await
        .context("While fetching table page")?;

    debug!("Got table page with {} rows", table_rows(&page).len());
    Ok(page)
}
