pub mod client;
pub mod commands;
pub mod connection_settings;
pub mod controller;
pub mod date_range;
pub mod envelope;
pub mod error;
pub mod paging;
pub mod partition_selector;
pub mod poller;
pub mod queries;
pub mod readiness;
mod utils;
