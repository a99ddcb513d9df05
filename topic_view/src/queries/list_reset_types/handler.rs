use crate::client::EfakClient;
use crate::queries::list_reset_types::{ResetTypePage, ResetTypesResponse, RESET_TYPES_PAGE_SIZE};
use anyhow::Context;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ResetTypesParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    page: u64,
    offset: u64,
}

/// Searches the offset reset directives; `page` is 1-based and defaults to the first page.
#[tracing::instrument(skip(client))]
pub async fn list_reset_types(
    client: &EfakClient,
    search: Option<&str>,
    page: Option<u64>,
) -> Result<ResetTypePage, anyhow::Error> {
    let page = page.filter(|x| *x > 0).unwrap_or(1);
    let params = ResetTypesParams {
        name: search,
        page,
        offset: RESET_TYPES_PAGE_SIZE,
    };

    let response: ResetTypesResponse = client
        .get_json(&["topic", "reset", "offset", "type", "list", "ajax"], &params)
        .await
        .context("While fetching offset reset types")?;

    Ok(ResetTypePage::from_response(response, page))
}
