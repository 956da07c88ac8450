#![allow(dead_code)]

use flexq::MessageBroker;
use flexq_model::{AdapterFamily, AdapterType, Channel, ResolveError, Service, ServiceKind};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Broker declaring `my-default-amf` as its broker-level default channel.
pub fn default_channels_broker() -> MessageBroker {
    init_tracing();
    let mut broker = MessageBroker::new("_messageBroker");
    broker
        .add_channel(Channel::new("my-streaming-amf", "streaming-amf"))
        .unwrap();
    broker.add_channel(Channel::new("my-default-amf", "amf")).unwrap();
    broker
        .add_channel(Channel::new("my-custom-default-amf", "amf"))
        .unwrap();
    broker.add_default_channel("my-default-amf").unwrap();
    broker
}

/// Broker without broker-level defaults; only one channel is binary remoting capable.
pub fn inferred_default_channels_broker() -> MessageBroker {
    init_tracing();
    let mut broker = MessageBroker::new("_messageBroker");
    broker
        .add_channel(Channel::new("my-streaming-amf", "streaming-amf"))
        .unwrap();
    broker.add_channel(Channel::new("my-http", "http")).unwrap();
    broker
        .add_channel(
            Channel::new("my-inferred-default-amf", "flex.messaging.endpoints.AMFEndpoint")
                .with_url("http://localhost:8080/messagebroker/amf"),
        )
        .unwrap();
    broker
}

/// Broker whose remoting service is already configured.
pub fn preconfigured_broker() -> MessageBroker {
    let mut broker = default_channels_broker();
    let mut service = Service::new("remoting-service", ServiceKind::Remoting);
    service.add_default_channel("my-custom-default-amf");
    let (id, adapter_type) = ServiceKind::Remoting.fallback_adapter();
    service.register_adapter(id, adapter_type);
    service.set_default_adapter(id).unwrap();
    broker.register_service(service).unwrap();
    broker
}

pub fn test_adapter() -> AdapterType {
    AdapterType::new("com.example.TestAdapter", AdapterFamily::JavaObject)
}

/// Resolves only `my-adapter`, to a remoting-compatible type.
pub fn resolve_test_adapter(id: &str) -> Result<AdapterType, ResolveError> {
    match id {
        "my-adapter" => Ok(test_adapter()),
        other => Err(ResolveError::NotFound(other.to_string())),
    }
}

pub fn resolve_nothing(id: &str) -> Result<AdapterType, ResolveError> {
    Err(ResolveError::NotFound(id.to_string()))
}
