pub mod app_config;
pub mod render;
pub mod startup;
