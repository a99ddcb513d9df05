use anyhow::Context;
use config::Config;
use serde::Deserialize;
use std::time::Duration;
use topic_view::commands::reset_offsets::ResetCommand;
use topic_view::connection_settings::EfakConnectionSettings;
use tracing::info;

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub efak: EfakConfig,
    pub topic: String,
    #[serde(default)]
    pub chart: ChartConfig,
    pub reset: Option<ResetConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EfakConfig {
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChartConfig {
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResetConfig {
    pub group: String,
    pub directive: String,
    pub value: Option<String>,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_refresh_interval_secs() -> u64 {
    300
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl AppConfig {
    pub fn build_from(file_name: &str) -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(config::File::with_name(file_name))
            .add_source(config::Environment::with_prefix("App").separator("__"))
            .build()
            .context("While building config")?;

        let deserialized_config: AppConfig = config
            .try_deserialize()
            .context("While deserializing config")?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }

    pub fn connection_settings(&self) -> EfakConnectionSettings {
        EfakConnectionSettings {
            base_url: self.efak.base_url.clone(),
            request_timeout: Duration::from_secs(self.efak.request_timeout_secs),
        }
    }

    pub fn chart_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.chart.refresh_interval_secs.max(1))
    }

    pub fn reset_command(&self) -> Option<ResetCommand> {
        self.reset.as_ref().map(|x| {
            ResetCommand::new(&x.group, &self.topic, &x.directive, x.value.clone())
        })
    }
}
