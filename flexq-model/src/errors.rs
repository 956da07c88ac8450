use thiserror::Error;

use crate::adapter::AdapterFamily;

/// Raised by an adapter type resolver that has no binding for an id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no adapter type is bound to id '{0}'")]
    NotFound(String),
}

/// Every way a service configuration can be rejected during startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("service '{service}' references unknown channel '{channel}'")]
    UnknownChannel { service: String, channel: String },

    #[error("broker '{broker}' names unknown channel '{channel}' as a default")]
    UnknownDefaultChannel { broker: String, channel: String },

    #[error("default adapter '{id}' could not be resolved: {source}")]
    UnresolvedAdapter {
        id: String,
        #[source]
        source: ResolveError,
    },

    #[error("default adapter '{id}' resolves to '{type_name}', which is not a {required} adapter")]
    IncompatibleAdapter {
        id: String,
        type_name: String,
        required: AdapterFamily,
    },

    #[error("default adapter '{adapter}' is not registered on service '{service}'")]
    UnregisteredDefaultAdapter { service: String, adapter: String },

    #[error("channel '{0}' is already registered")]
    DuplicateChannel(String),

    #[error("a service of type '{0}' is already registered")]
    DuplicateService(String),

    #[error("broker '{0}' is already running and can no longer be configured")]
    BrokerStarted(String),
}

#[derive(Debug, Error)]
pub enum InstantiationError {
    #[error("could not construct component '{component}': {reason}")]
    Construct { component: String, reason: String },

    #[error("component '{component}' failed to initialize: {reason}")]
    Initialize { component: String, reason: String },

    #[error("invalid component properties: {0}")]
    InvalidProperties(String),
}
