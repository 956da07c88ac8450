mod config;
pub mod server;

pub use config::{AdapterConfig, BrokerConfig, ServiceConfig};
