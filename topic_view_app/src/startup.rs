use crate::app_config::AppConfig;
use crate::render::{log_forwarded_table, log_metrics, log_table, LogChartRenderer};
use anyhow::Context;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use topic_view::client::EfakClient;
use topic_view::commands::reset_offsets::reset_offsets;
use topic_view::controller::TopicPageController;
use topic_view::date_range::{self, DateRange};
use topic_view::paging::TableDescriptor;
use topic_view::poller::ProducerChartPoller;
use topic_view::queries::get_consumer_groups::CONSUMER_GROUP_COLUMNS;
use topic_view::queries::get_topic_capacity::get_topic_capacity;
use topic_view::queries::get_topic_meta::META_COLUMNS;
use topic_view::queries::get_topic_metrics::get_topic_metrics;
use tracing::{error, info};

const MESSAGE_COLUMNS: [&str; 6] = ["topic", "partition", "offset", "msg", "timespan", "date"];

pub async fn run_until_stopped(config: AppConfig) -> Result<(), anyhow::Error> {
    let client = EfakClient::try_from(&config.connection_settings())
        .context("While creating EFAK client")?;
    info!("Watching topic {} on {}", config.topic, client.base_url());

    let mut controller = TopicPageController::new(client.clone(), &config.topic);
    let load = controller.load().await;
    if let Some(meta) = &load.meta {
        log_forwarded_table("Partitions", meta, &META_COLUMNS);
    }
    log_table("Messages", &load.messages, &MESSAGE_COLUMNS);

    if controller.is_ready() {
        info!(
            "Partition {} selected of {:?}, messages {}",
            controller.partitions().selected(),
            controller.partitions().available(),
            controller.message_range_label()
        );
        let messages = controller.query().await;
        log_table("Messages of selected partition", &messages, &MESSAGE_COLUMNS);
    }

    match controller
        .consumer_groups_page(TableDescriptor::for_draw(1, 0, 10, &CONSUMER_GROUP_COLUMNS))
        .await
    {
        Ok(groups) => log_forwarded_table("Consumer groups", &groups, &CONSUMER_GROUP_COLUMNS),
        Err(e) => error!("Consumer groups table load error\n{e:?}"),
    }

    match get_topic_metrics(&client, &config.topic).await {
        Ok(rows) => log_metrics(&rows),
        Err(e) => error!("Topic metrics load error\n{e:?}"),
    }

    match get_topic_capacity(&client, &config.topic).await {
        Ok(Some(capacity)) => info!(
            "Log size {}, capacity {}",
            capacity.log_size_label(),
            capacity.capacity_label()
        ),
        Ok(None) => {}
        Err(e) => error!("Topic capacity load error\n{e:?}"),
    }

    if let Some(command) = config.reset_command() {
        match reset_offsets(&client, &command).await {
            Ok(outcome) => {
                for line in outcome.display_lines() {
                    info!("Reset offsets: {line}");
                }
            }
            Err(e) => error!("Reset offsets error\n{e:?}"),
        }
    }

    let (_ranges_tx, ranges_rx) = watch::channel(DateRange::default_chart_range(date_range::now()));
    let cancellation_token = CancellationToken::new();
    let poller = ProducerChartPoller::new(client, &config.topic, LogChartRenderer::default())
        .with_refresh_interval(config.chart_refresh_interval());
    let poller_handle = tokio::task::spawn(poller.run(ranges_rx, cancellation_token.clone()));

    tokio::signal::ctrl_c()
        .await
        .context("While waiting for shutdown signal")?;
    info!("Stopping");
    cancellation_token.cancel();

    let renderer = poller_handle.await.context("While joining chart poller")?;
    info!("Producer chart rendered {} times", renderer.renders);

    Ok(())
}
