use serde_json::Value;
use topic_view::envelope::{table_display_total, table_rows, TableEnvelope};
use topic_view::poller::ChartRenderer;
use topic_view::queries::get_producer_chart::ChartOptions;
use topic_view::queries::get_topic_metrics::MetricRow;
use tracing::{error, info};

/// Logs a table page, one line per row, showing `columns` in order.
pub fn log_table(title: &str, envelope: &TableEnvelope, columns: &[&str]) {
    log_rows(title, &envelope.data, envelope.total_display_records, columns);
}

/// Logs a page forwarded as the server sent it.
pub fn log_forwarded_table(title: &str, page: &Value, columns: &[&str]) {
    log_rows(title, table_rows(page), table_display_total(page), columns);
}

fn log_rows(title: &str, rows: &[Value], total: u64, columns: &[&str]) {
    info!("{title}: {} of {total} rows", rows.len());
    for row in rows {
        info!("  {}", format_row(row, columns));
    }
}

pub fn format_row(row: &Value, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|column| match row.get(column) {
            None | Some(Value::Null) => "-".to_owned(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn log_metrics(rows: &[MetricRow]) {
    info!("Rate | Mean | 1 Minute | 5 Minute | 15 Minute");
    for row in rows {
        info!(
            "{} | {} | {} | {} | {}",
            row.label, row.mean_rate, row.one_minute, row.five_minute, row.fifteen_minute
        );
    }
}

/// Chart renderer writing the latest series to the log.
#[derive(Debug, Default)]
pub struct LogChartRenderer {
    pub renders: u64,
}

impl ChartRenderer for LogChartRenderer {
    fn render(&mut self, options: &ChartOptions) {
        self.renders += 1;
        let Some(series) = options.series.first() else {
            return;
        };
        info!(
            "Producer chart '{}' update #{}: {} points",
            series.name,
            self.renders,
            series.data.len()
        );
        match serde_json::to_string(options) {
            Ok(json) => tracing::debug!("Chart options: {json}"),
            Err(e) => error!("Chart options serialization error\n{e:?}"),
        }
    }
}
