use crate::client::EfakClient;
use anyhow::{bail, Context};
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct EfakConnectionSettings {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl EfakConnectionSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl TryFrom<&EfakConnectionSettings> for EfakClient {
    type Error = anyhow::Error;

    fn try_from(value: &EfakConnectionSettings) -> Result<Self, Self::Error> {
        if value.base_url.trim().is_empty() {
            bail!("No EFAK base url specified")
        }

        let base_url = Url::parse(value.base_url.trim())
            .with_context(|| format!("While parsing EFAK base url '{}'", value.base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("EFAK base url '{}' can't be used as a base", base_url)
        }

        let http = reqwest::Client::builder()
            .timeout(value.request_timeout)
            .build()
            .context("While building http client")?;

        Ok(EfakClient::new(http, base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_is_rejected() {
        let settings = EfakConnectionSettings::new("  ");
        assert!(EfakClient::try_from(&settings).is_err());
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let settings = EfakConnectionSettings::new("efak.local/console");
        assert!(EfakClient::try_from(&settings).is_err());
    }

    #[test]
    fn absolute_base_url_builds_client() {
        let settings = EfakConnectionSettings::new("http://127.0.0.1:8048");
        let client = EfakClient::try_from(&settings).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8048/");
    }
}
