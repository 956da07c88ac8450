use std::fmt;
use std::sync::Arc;

use flexq_model::{ConfigError, Service, ServiceKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::adapter_resolver::AdapterTypeResolver;
use crate::core::broker::MessageBroker;
use crate::core::defaults::{resolve_adapter, resolve_channels};
use crate::core::processor::ConfigProcessor;

/// Operator overrides for the service a processor creates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceProcessorConfig {
    /// Id for the created service; the kind's default id when unset.
    pub service_id: Option<String>,

    /// Used verbatim and validated against the broker's channels.
    pub default_channels: Option<Vec<String>>,

    pub default_adapter_id: Option<String>,
}

/// Creates the service of one kind when the broker does not already define it.
///
/// A service that already exists is left exactly as it is. Otherwise a new
/// one is built with defaulted channels and adapter and registered on the
/// broker.
pub struct ServiceConfigProcessor {
    kind: ServiceKind,
    config: ServiceProcessorConfig,
    resolver: Option<Arc<dyn AdapterTypeResolver>>,
    name: String,
}

impl fmt::Debug for ServiceConfigProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfigProcessor")
            .field("kind", &self.kind)
            .field("config", &self.config)
            .field("custom_resolver", &self.resolver.is_some())
            .finish()
    }
}

impl ServiceConfigProcessor {
    pub fn new(kind: ServiceKind) -> Self {
        Self {
            kind,
            config: ServiceProcessorConfig::default(),
            resolver: None,
            name: format!("{}ConfigProcessor", kind.type_name()),
        }
    }

    pub fn remoting() -> Self {
        Self::new(ServiceKind::Remoting)
    }

    pub fn messaging() -> Self {
        Self::new(ServiceKind::Messaging)
    }

    pub fn with_config(mut self, config: ServiceProcessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_default_channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.default_channels = Some(channels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_default_adapter_id(mut self, id: impl Into<String>) -> Self {
        self.config.default_adapter_id = Some(id.into());
        self
    }

    pub fn with_service_id(mut self, id: impl Into<String>) -> Self {
        self.config.service_id = Some(id.into());
        self
    }

    /// Replaces the broker's adapter registry as the source of adapter types.
    pub fn with_adapter_resolver(mut self, resolver: Arc<dyn AdapterTypeResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    fn build_service(&self, broker: &MessageBroker) -> Result<Service, ConfigError> {
        let service_id = self
            .config
            .service_id
            .as_deref()
            .unwrap_or(self.kind.default_service_id());
        let mut service = Service::new(service_id, self.kind);

        if service.default_channels().is_empty() {
            let channels = resolve_channels(
                service_id,
                self.config.default_channels.as_deref(),
                broker.default_channels(),
                broker.channels(),
            )?;
            debug!(service = %service_id, source = ?channels.source, channels = ?channels.ids, "resolved default channels");
            for id in channels.ids {
                service.add_default_channel(id);
            }
        }

        let resolver: &dyn AdapterTypeResolver = match &self.resolver {
            Some(resolver) => &**resolver,
            None => broker.adapter_registry(),
        };
        let adapter = resolve_adapter(self.kind, self.config.default_adapter_id.as_deref(), resolver)?;

        let (fallback_id, fallback_type) = self.kind.fallback_adapter();
        service.register_adapter(fallback_id, fallback_type);
        if adapter.custom {
            service.register_adapter(adapter.id.clone(), adapter.adapter_type);
        }
        service.set_default_adapter(&adapter.id)?;

        Ok(service)
    }
}

impl ConfigProcessor for ServiceConfigProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn process_before_startup(&self, mut broker: MessageBroker) -> Result<MessageBroker, ConfigError> {
        if let Some(existing) = broker.service_by_type(self.kind.type_name()) {
            debug!(service = %existing.id(), kind = %self.kind, "service already configured, leaving it untouched");
            return Ok(broker);
        }

        info!(kind = %self.kind, "no service configured, creating one with defaults");
        let service = self.build_service(&broker)?;
        broker.register_service(service)?;
        Ok(broker)
    }

    fn process_after_startup(&self, broker: MessageBroker) -> Result<MessageBroker, ConfigError> {
        match broker.service_by_type(self.kind.type_name()) {
            Some(service) => debug!(
                service = %service.id(),
                channels = ?service.default_channels(),
                adapter = ?service.default_adapter(),
                "service live after startup"
            ),
            None => debug!(kind = %self.kind, "no service live after startup"),
        }
        Ok(broker)
    }
}
