#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(forgetting_copy_types)]
#![deny(clippy::style)]

use anyhow::Context;
use topic_view_app::app_config::AppConfig;
use topic_view_app::startup::run_until_stopped;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_SETTINGS_FILE: &str = "appsettings";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());

    println!("Log level: {}", log_level);

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(log_level);

    tracing_subscriber::registry()
        .with(
            console_subscriber::ConsoleLayer::builder()
                .with_default_env()
                .spawn(),
        )
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .init();

    let settings_file =
        std::env::var("TOPIC_VIEW_SETTINGS").unwrap_or(DEFAULT_SETTINGS_FILE.to_owned());
    let config = AppConfig::build_from(&settings_file)
        .with_context(|| format!("While building app config from {settings_file}"))?;

    run_until_stopped(config).await?;

    Ok(())
}
