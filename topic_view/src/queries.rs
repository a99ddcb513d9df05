pub mod get_consumer_groups;
pub mod get_producer_chart;
pub mod get_topic_capacity;
pub mod get_topic_messages;
pub mod get_topic_meta;
pub mod get_topic_metrics;
pub mod list_reset_types;
pub mod preview_message;
mod table_page;
