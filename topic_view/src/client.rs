use anyhow::{anyhow, Context};
use http::header::{CACHE_CONTROL, IF_MODIFIED_SINCE};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

pub const NO_PARAMS: [(&str, &str); 0] = [];

/// Thin JSON-over-HTTP client for the EFAK web endpoints.
#[derive(Debug, Clone)]
pub struct EfakClient {
    http: reqwest::Client,
    base_url: Url,
}

impl EfakClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins path segments onto the base url, percent-encoding each of them.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, anyhow::Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base url {} can't have path segments", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get_json<Q, T>(&self, segments: &[&str], query: &Q) -> Result<T, anyhow::Error>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let request = self.http.get(url.clone()).query(query);
        Self::send(request, &url)
            .await?
            .json::<T>()
            .await
            .with_context(|| format!("While parsing response of {url}"))
    }

    /// Same as [`EfakClient::get_json`] but forces the server to revalidate.
    pub async fn get_json_uncached<Q, T>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<T, anyhow::Error>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let request = self
            .http
            .get(url.clone())
            .query(query)
            .header(IF_MODIFIED_SINCE, "0")
            .header(CACHE_CONTROL, "no-cache");
        Self::send(request, &url)
            .await?
            .json::<T>()
            .await
            .with_context(|| format!("While parsing response of {url}"))
    }

    pub async fn get_text<Q>(&self, segments: &[&str], query: &Q) -> Result<String, anyhow::Error>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let request = self.http.get(url.clone()).query(query);
        Self::send(request, &url)
            .await?
            .text()
            .await
            .with_context(|| format!("While reading response body of {url}"))
    }

    pub async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, anyhow::Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let request = self.http.post(url.clone()).json(body);
        Self::send(request, &url)
            .await?
            .json::<T>()
            .await
            .with_context(|| format!("While parsing response of {url}"))
    }

    async fn send(request: RequestBuilder, url: &Url) -> Result<reqwest::Response, anyhow::Error> {
        debug!("Sending request to {url}");
        let response = request
            .send()
            .await
            .with_context(|| format!("While sending request to {url}"))?
            .error_for_status()
            .with_context(|| format!("While checking response status of {url}"))?;
        trace!("Got {} from {url}", response.status());
        Ok(response)
    }
}
