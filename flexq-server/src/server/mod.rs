mod params;

pub use params::Params;

use anyhow::{Context, Result};
use flexq::MessageBroker;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::BrokerConfig;

pub fn init_tracing(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_target(false)
        .with_thread_ids(true)
        .compact()
        .try_init();
}

/// Loads the config, builds the broker and runs the startup pipeline.
pub fn start(params: &Params) -> Result<MessageBroker> {
    let config = BrokerConfig::load_or_default(params.config.as_ref())?;
    info!(broker = %config.id, channels = config.channels.len(), services = config.services.len(), "flexq starting");
    run(&config)
}

pub fn run(config: &BrokerConfig) -> Result<MessageBroker> {
    let broker = config
        .build_broker()
        .with_context(|| format!("building broker '{}'", config.id))?;
    let broker = config
        .pipeline()
        .run(broker)
        .with_context(|| format!("starting broker '{}'", config.id))?;

    for service in broker.summary().services {
        info!(
            service = %service.id(),
            channels = ?service.default_channels(),
            adapter = ?service.default_adapter(),
            "service ready"
        );
    }
    Ok(broker)
}

pub fn render_summary(broker: &MessageBroker) -> Result<String> {
    serde_json::to_string_pretty(&broker.summary()).context("serializing broker summary")
}
