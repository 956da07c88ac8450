use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::adapter::{AdapterFamily, AdapterType, ACTIONSCRIPT_ADAPTER_ID, JAVA_OBJECT_ADAPTER_ID};
use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Remoting,
    Messaging,
}

impl ServiceKind {
    /// Key under which the broker keeps the single service of this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            ServiceKind::Remoting => "RemotingService",
            ServiceKind::Messaging => "MessageService",
        }
    }

    pub fn default_service_id(self) -> &'static str {
        match self {
            ServiceKind::Remoting => "remoting-service",
            ServiceKind::Messaging => "message-service",
        }
    }

    pub fn adapter_family(self) -> AdapterFamily {
        match self {
            ServiceKind::Remoting => AdapterFamily::JavaObject,
            ServiceKind::Messaging => AdapterFamily::ActionScript,
        }
    }

    /// Adapter assigned when the operator names none; never needs a resolver lookup.
    pub fn fallback_adapter(self) -> (&'static str, AdapterType) {
        match self {
            ServiceKind::Remoting => (JAVA_OBJECT_ADAPTER_ID, AdapterType::java_object()),
            ServiceKind::Messaging => (ACTIONSCRIPT_ADAPTER_ID, AdapterType::actionscript()),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A service definition. Built up completely, then handed to the broker
/// which keeps it behind an `Arc` for the rest of its life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    id: String,
    kind: ServiceKind,
    default_channels: Vec<String>,
    adapters: BTreeMap<String, AdapterType>,
    default_adapter: Option<String>,
}

impl Service {
    pub fn new(id: impl Into<String>, kind: ServiceKind) -> Self {
        Self {
            id: id.into(),
            kind,
            default_channels: Vec::new(),
            adapters: BTreeMap::new(),
            default_adapter: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    pub fn default_channels(&self) -> &[String] {
        &self.default_channels
    }

    pub fn default_adapter(&self) -> Option<&str> {
        self.default_adapter.as_deref()
    }

    pub fn adapters(&self) -> &BTreeMap<String, AdapterType> {
        &self.adapters
    }

    pub fn add_default_channel(&mut self, channel_id: impl Into<String>) {
        let channel_id = channel_id.into();
        if !self.default_channels.contains(&channel_id) {
            self.default_channels.push(channel_id);
        }
    }

    pub fn register_adapter(&mut self, id: impl Into<String>, adapter_type: AdapterType) {
        self.adapters.insert(id.into(), adapter_type);
    }

    /// The adapter must already be registered on this service.
    pub fn set_default_adapter(&mut self, id: &str) -> Result<(), ConfigError> {
        if !self.adapters.contains_key(id) {
            return Err(ConfigError::UnregisteredDefaultAdapter {
                service: self.id.clone(),
                adapter: id.to_string(),
            });
        }
        self.default_adapter = Some(id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_channels_keep_insertion_order_without_duplicates() {
        let mut service = Service::new("remoting-service", ServiceKind::Remoting);
        service.add_default_channel("b");
        service.add_default_channel("a");
        service.add_default_channel("b");

        assert_eq!(service.default_channels(), ["b", "a"]);
    }

    #[test]
    fn default_adapter_must_be_registered_first() {
        let mut service = Service::new("remoting-service", ServiceKind::Remoting);
        let err = service.set_default_adapter("java-object").unwrap_err();
        assert!(matches!(err, ConfigError::UnregisteredDefaultAdapter { .. }));
        assert_eq!(service.default_adapter(), None);

        let (id, adapter_type) = ServiceKind::Remoting.fallback_adapter();
        service.register_adapter(id, adapter_type);
        service.set_default_adapter(id).unwrap();
        assert_eq!(service.default_adapter(), Some("java-object"));
    }

    #[test]
    fn serializes_for_reporting() {
        let mut service = Service::new("remoting-service", ServiceKind::Remoting);
        let (id, adapter_type) = ServiceKind::Remoting.fallback_adapter();
        service.register_adapter(id, adapter_type);
        service.set_default_adapter(id).unwrap();

        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["kind"], "remoting");
        assert_eq!(json["default_adapter"], "java-object");
        assert_eq!(json["adapters"]["java-object"]["family"], "java-object");
    }
}
