//! Default channel and adapter selection for a service that is being created.
//!
//! Precedence for channels: operator override, then broker-level defaults,
//! then the first binary-remoting channel in declaration order.
//! Precedence for adapters: operator override (resolved and type-checked),
//! then the service kind's built-in fallback.

use flexq_model::{AdapterType, ConfigError, ServiceKind};
use tracing::{debug, warn};

use crate::core::adapter_resolver::AdapterTypeResolver;
use crate::core::channel_registry::ChannelRegistry;

/// Where a service's default channels came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSource {
    Custom,
    Broker,
    Inferred,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannels {
    pub ids: Vec<String>,
    pub source: ChannelSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAdapter {
    pub id: String,
    pub adapter_type: AdapterType,
    pub custom: bool,
}

pub fn resolve_channels(
    service_id: &str,
    custom: Option<&[String]>,
    broker_defaults: &[String],
    registry: &ChannelRegistry,
) -> Result<ResolvedChannels, ConfigError> {
    if let Some(custom) = custom.filter(|c| !c.is_empty()) {
        validate_channels(service_id, custom, registry)?;
        return Ok(ResolvedChannels {
            ids: custom.to_vec(),
            source: ChannelSource::Custom,
        });
    }

    if !broker_defaults.is_empty() {
        return Ok(ResolvedChannels {
            ids: broker_defaults.to_vec(),
            source: ChannelSource::Broker,
        });
    }

    match registry.iter().find(|c| c.is_binary_remoting()) {
        Some(channel) => {
            debug!(service = %service_id, channel = %channel.id, "inferred default channel");
            Ok(ResolvedChannels {
                ids: vec![channel.id.clone()],
                source: ChannelSource::Inferred,
            })
        }
        None => {
            warn!(service = %service_id, "no binary remoting channel registered, service has no default channel");
            Ok(ResolvedChannels {
                ids: Vec::new(),
                source: ChannelSource::Empty,
            })
        }
    }
}

/// Fails on the first id missing from the registry.
pub fn validate_channels(service_id: &str, ids: &[String], registry: &ChannelRegistry) -> Result<(), ConfigError> {
    match ids.iter().find(|id| !registry.contains(id)) {
        Some(unknown) => Err(ConfigError::UnknownChannel {
            service: service_id.to_string(),
            channel: unknown.clone(),
        }),
        None => Ok(()),
    }
}

pub fn resolve_adapter(
    kind: ServiceKind,
    custom: Option<&str>,
    resolver: &dyn AdapterTypeResolver,
) -> Result<ResolvedAdapter, ConfigError> {
    let Some(id) = custom.filter(|id| !id.is_empty()) else {
        let (id, adapter_type) = kind.fallback_adapter();
        return Ok(ResolvedAdapter {
            id: id.to_string(),
            adapter_type,
            custom: false,
        });
    };

    let adapter_type = resolver.resolve(id).map_err(|source| ConfigError::UnresolvedAdapter {
        id: id.to_string(),
        source,
    })?;

    let required = kind.adapter_family();
    if !adapter_type.is_assignable_to(required) {
        return Err(ConfigError::IncompatibleAdapter {
            id: id.to_string(),
            type_name: adapter_type.type_name,
            required,
        });
    }

    Ok(ResolvedAdapter {
        id: id.to_string(),
        adapter_type,
        custom: true,
    })
}
