use crate::client::EfakClient;
use crate::date_range::DateRange;
use crate::queries::get_producer_chart::{get_producer_chart, ChartOptions, GetProducerChartQuery};
use std::time::Duration;
use tokio::select;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

pub const DEFAULT_CHART_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Receives the whole chart configuration on every update.
pub trait ChartRenderer: Send {
    fn render(&mut self, options: &ChartOptions);
}

pub struct ProducerChartPoller<R> {
    client: EfakClient,
    topic: String,
    renderer: R,
    options: ChartOptions,
    refresh_interval: Duration,
}

impl<R: ChartRenderer> ProducerChartPoller<R> {
    pub fn new(client: EfakClient, topic: impl Into<String>, renderer: R) -> Self {
        Self {
            client,
            topic: topic.into(),
            renderer,
            options: ChartOptions::default(),
            refresh_interval: DEFAULT_CHART_REFRESH_INTERVAL,
        }
    }

    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Fetches the chart for `range` and renders it; an empty response leaves the chart as is.
    pub async fn refresh(&mut self, range: DateRange) -> Result<bool, anyhow::Error> {
        let query = GetProducerChartQuery {
            topic: self.topic.clone(),
            range,
        };
        let Some(series) = get_producer_chart(&self.client, &query).await? else {
            return Ok(false);
        };

        self.options = self.options.with_series(series);
        self.renderer.render(&self.options);
        Ok(true)
    }

    /// Refreshes on start, on every applied range and on every interval tick until cancelled.
    #[tracing::instrument(skip_all, fields(topic = %self.topic))]
    pub async fn run(
        mut self,
        mut ranges: watch::Receiver<DateRange>,
        cancellation_token: CancellationToken,
    ) -> R {
        let mut range = *ranges.borrow_and_update();
        let mut interval = tokio::time::interval(self.refresh_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ranges_open = true;

        loop {
            select! {
                _ = cancellation_token.cancelled() => break,
                _ = interval.tick() => {
                    debug!("Producer chart timer refresh for {}", range.chart_label());
                },
                changed = ranges.changed(), if ranges_open => {
                    if changed.is_err() {
                        ranges_open = false;
                        continue;
                    }
                    range = *ranges.borrow_and_update();
                    debug!("Producer chart range applied: {}", range.chart_label());
                },
            }

            select! {
                _ = cancellation_token.cancelled() => break,
                result = self.refresh(range) => {
                    if let Err(e) = result {
                        error!("Producer chart refresh error\n{e:?}");
                    }
                },
            }
        }

        self.renderer
    }
}
