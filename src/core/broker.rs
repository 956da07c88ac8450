use std::sync::Arc;

use flexq_model::{AdapterType, Channel, ConfigError, Service};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::adapter_resolver::AdapterRegistry;
use crate::core::channel_registry::ChannelRegistry;
use crate::core::service_registry::ServiceRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrokerState {
    Configuring,
    Running,
}

/// The broker being assembled during startup.
///
/// Owned by whoever drives startup and passed by value through every
/// processor. All mutators fail once [`MessageBroker::start`] has succeeded.
#[derive(Debug)]
pub struct MessageBroker {
    id: String,
    state: BrokerState,
    channels: ChannelRegistry,
    default_channels: Vec<String>,
    adapters: AdapterRegistry,
    services: ServiceRegistry,
}

/// Snapshot of a broker, used for reporting.
#[derive(Debug, Serialize)]
pub struct BrokerSummary<'a> {
    pub id: &'a str,
    pub state: BrokerState,
    pub channels: Vec<&'a Channel>,
    pub default_channels: &'a [String],
    pub services: Vec<&'a Service>,
}

impl MessageBroker {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: BrokerState::Configuring,
            channels: ChannelRegistry::new(),
            default_channels: Vec::new(),
            adapters: AdapterRegistry::new(),
            services: ServiceRegistry::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> BrokerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == BrokerState::Running
    }

    fn ensure_configuring(&self) -> Result<(), ConfigError> {
        match self.state {
            BrokerState::Configuring => Ok(()),
            BrokerState::Running => Err(ConfigError::BrokerStarted(self.id.clone())),
        }
    }

    pub fn add_channel(&mut self, channel: Channel) -> Result<(), ConfigError> {
        self.ensure_configuring()?;
        debug!(broker = %self.id, channel = %channel.id, endpoint = %channel.endpoint, "registering channel");
        self.channels.register(channel)
    }

    /// Broker-level default channels must already be registered.
    pub fn add_default_channel(&mut self, channel_id: impl Into<String>) -> Result<(), ConfigError> {
        self.ensure_configuring()?;
        let channel_id = channel_id.into();
        if !self.channels.contains(&channel_id) {
            return Err(ConfigError::UnknownDefaultChannel {
                broker: self.id.clone(),
                channel: channel_id,
            });
        }
        if !self.default_channels.contains(&channel_id) {
            self.default_channels.push(channel_id);
        }
        Ok(())
    }

    pub fn bind_adapter(&mut self, id: impl Into<String>, adapter_type: AdapterType) -> Result<(), ConfigError> {
        self.ensure_configuring()?;
        self.adapters.bind(id, adapter_type);
        Ok(())
    }

    pub fn register_service(&mut self, service: Service) -> Result<Arc<Service>, ConfigError> {
        self.ensure_configuring()?;
        info!(
            broker = %self.id,
            service = %service.id(),
            kind = %service.kind(),
            "registering service"
        );
        self.services.register(service)
    }

    pub fn channels(&self) -> &ChannelRegistry {
        &self.channels
    }

    pub fn default_channels(&self) -> &[String] {
        &self.default_channels
    }

    pub fn adapter_registry(&self) -> &AdapterRegistry {
        &self.adapters
    }

    /// Returns a handle to the live service; handles compare with `Arc::ptr_eq`.
    pub fn service_by_type(&self, type_name: &str) -> Option<Arc<Service>> {
        self.services.get(type_name).cloned()
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    /// Validates every registered service against the registries and marks
    /// the broker running.
    pub fn start(&mut self) -> Result<(), ConfigError> {
        self.ensure_configuring()?;
        for service in self.services.values() {
            if let Some(unknown) = service
                .default_channels()
                .iter()
                .find(|id| !self.channels.contains(id))
            {
                return Err(ConfigError::UnknownChannel {
                    service: service.id().to_string(),
                    channel: unknown.clone(),
                });
            }
            if let Some(adapter) = service.default_adapter() {
                if !service.adapters().contains_key(adapter) {
                    return Err(ConfigError::UnregisteredDefaultAdapter {
                        service: service.id().to_string(),
                        adapter: adapter.to_string(),
                    });
                }
            }
        }
        self.state = BrokerState::Running;
        info!(broker = %self.id, services = self.services.len(), channels = self.channels.len(), "broker started");
        Ok(())
    }

    pub fn summary(&self) -> BrokerSummary<'_> {
        let mut services: Vec<&Service> = self.services.values().map(Arc::as_ref).collect();
        services.sort_by(|a, b| a.id().cmp(b.id()));
        BrokerSummary {
            id: &self.id,
            state: self.state,
            channels: self.channels.iter().collect(),
            default_channels: &self.default_channels,
            services,
        }
    }
}
