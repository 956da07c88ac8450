use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use flexq::core::defaults::resolve_adapter;
use flexq::{MessageBroker, ServiceConfigProcessor, ServiceProcessorConfig, StartupPipeline};
use flexq_model::{AdapterFamily, AdapterType, Channel, ConfigError, Service, ServiceKind};
use serde::{Deserialize, Serialize};

/// Everything the broker is started from: its channels, adapter bindings,
/// explicitly configured services and the processor overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    pub id: String,

    /// Declaration order matters: default channel inference picks the first match.
    pub channels: Vec<Channel>,

    /// Broker-level default channels, used by services that name none.
    pub default_channels: Vec<String>,

    pub adapters: Vec<AdapterConfig>,

    /// Services defined up front. The processors never touch these.
    pub services: Vec<ServiceConfig>,

    /// Remoting processor overrides. `None` disables the processor.
    pub remoting: Option<ServiceProcessorConfig>,

    pub messaging: Option<ServiceProcessorConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub family: AdapterFamily,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub id: String,
    pub kind: ServiceKind,
    #[serde(default)]
    pub default_channels: Vec<String>,
    #[serde(default)]
    pub default_adapter: Option<String>,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            id: "_messageBroker".to_string(),
            channels: Vec::new(),
            default_channels: Vec::new(),
            adapters: Vec::new(),
            services: Vec::new(),
            remoting: Some(ServiceProcessorConfig::default()),
            messaging: None,
        }
    }
}

impl BrokerConfig {
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::read_from_file(p), // propagate errors unchanged
            None => Ok(Self::default()),
        }
    }

    fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(&path).with_context(|| format!("reading {:?}", path.as_ref()))?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let cfg: BrokerConfig = toml::from_str(raw).with_context(|| "parsing broker config TOML")?;
        Ok(cfg)
    }

    /// Builds the not-yet-started broker described by this config.
    pub fn build_broker(&self) -> Result<MessageBroker, ConfigError> {
        let mut broker = MessageBroker::new(&self.id);
        for channel in &self.channels {
            broker.add_channel(channel.clone())?;
        }
        for id in &self.default_channels {
            broker.add_default_channel(id)?;
        }
        for adapter in &self.adapters {
            broker.bind_adapter(&adapter.id, AdapterType::new(&adapter.type_name, adapter.family))?;
        }
        for service in &self.services {
            let service = service.build(&broker)?;
            broker.register_service(service)?;
        }
        Ok(broker)
    }

    pub fn pipeline(&self) -> StartupPipeline {
        let mut pipeline = StartupPipeline::new();
        if let Some(remoting) = &self.remoting {
            pipeline.add(ServiceConfigProcessor::remoting().with_config(remoting.clone()));
        }
        if let Some(messaging) = &self.messaging {
            pipeline.add(ServiceConfigProcessor::messaging().with_config(messaging.clone()));
        }
        pipeline
    }
}

impl ServiceConfig {
    /// Channel ids are checked when the broker starts.
    fn build(&self, broker: &MessageBroker) -> Result<Service, ConfigError> {
        let mut service = Service::new(&self.id, self.kind);
        for id in &self.default_channels {
            service.add_default_channel(id);
        }

        // The built-in adapter id needs no binding, but an `[[adapters]]` entry for it wins.
        let (fallback_id, fallback_type) = self.kind.fallback_adapter();
        let registry = broker.adapter_registry();
        let custom = self
            .default_adapter
            .as_deref()
            .filter(|id| *id != fallback_id || registry.contains(id));
        let adapter = resolve_adapter(self.kind, custom, registry)?;

        service.register_adapter(fallback_id, fallback_type);
        if adapter.custom {
            service.register_adapter(adapter.id.clone(), adapter.adapter_type);
        }
        service.set_default_adapter(&adapter.id)?;
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = BrokerConfig::parse("").unwrap();
        assert_eq!(cfg, BrokerConfig::default());
        assert_eq!(cfg.pipeline().len(), 1);
    }

    #[test]
    fn parses_full_config() {
        let cfg = BrokerConfig::parse(
            r#"
            id = "broker-1"
            default_channels = ["my-amf"]

            [[channels]]
            id = "my-amf"
            endpoint = "amf"
            url = "http://localhost/amf"

            [[adapters]]
            id = "my-adapter"
            type = "com.example.TestAdapter"
            family = "java-object"

            [[services]]
            id = "remoting-service"
            kind = "remoting"
            default_adapter = "my-adapter"

            [remoting]
            default_channels = ["my-amf"]

            [messaging]
            service_id = "events"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.id, "broker-1");
        assert_eq!(cfg.channels[0].url.as_deref(), Some("http://localhost/amf"));
        assert_eq!(cfg.adapters[0].family, AdapterFamily::JavaObject);
        assert_eq!(cfg.services[0].kind, ServiceKind::Remoting);
        assert_eq!(cfg.messaging.as_ref().unwrap().service_id.as_deref(), Some("events"));
        assert_eq!(cfg.pipeline().len(), 2);

        let broker = cfg.build_broker().unwrap();
        let service = broker.service_by_type("RemotingService").unwrap();
        assert_eq!(service.default_adapter(), Some("my-adapter"));
    }

    #[test]
    fn preconfigured_service_with_unbound_adapter_is_rejected() {
        let cfg = BrokerConfig::parse(
            r#"
            [[services]]
            id = "remoting-service"
            kind = "remoting"
            default_adapter = "nowhere"
            "#,
        )
        .unwrap();

        assert!(matches!(cfg.build_broker(), Err(ConfigError::UnresolvedAdapter { .. })));
    }

    #[test]
    fn builtin_adapter_id_needs_no_binding_but_honors_one() {
        let builtin = BrokerConfig::parse(
            r#"
            [[services]]
            id = "remoting-service"
            kind = "remoting"
            default_adapter = "java-object"
            "#,
        )
        .unwrap();
        let broker = builtin.build_broker().unwrap();
        let service = broker.service_by_type("RemotingService").unwrap();
        assert_eq!(service.adapters().get("java-object"), Some(&AdapterType::java_object()));

        let rebound = BrokerConfig::parse(
            r#"
            [[adapters]]
            id = "java-object"
            type = "com.example.TracingJavaAdapter"
            family = "java-object"

            [[services]]
            id = "remoting-service"
            kind = "remoting"
            default_adapter = "java-object"
            "#,
        )
        .unwrap();
        let broker = rebound.build_broker().unwrap();
        let service = broker.service_by_type("RemotingService").unwrap();
        assert_eq!(service.default_adapter(), Some("java-object"));
        assert_eq!(
            service.adapters().get("java-object").map(|t| t.type_name.as_str()),
            Some("com.example.TracingJavaAdapter")
        );
    }

    #[test]
    fn mistyped_field_fails_to_parse() {
        assert!(BrokerConfig::parse("channels = 3").is_err());
    }
}
