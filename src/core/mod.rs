// src/core/mod.rs
//! Configuration and transport for the remote config endpoint

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ConfigManager, EndpointConfig};
pub use service_client::ConfigClient;
