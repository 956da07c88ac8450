use std::fmt;

use flexq_model::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    BeforeStartup,
    AfterStartup,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::BeforeStartup => f.write_str("before startup"),
            Phase::AfterStartup => f.write_str("after startup"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("processor '{processor}' failed {phase}: {source}")]
    Processor {
        processor: String,
        phase: Phase,
        #[source]
        source: ConfigError,
    },

    #[error("broker failed to start: {0}")]
    Broker(#[from] ConfigError),
}

impl StartupError {
    /// The configuration error underneath, whichever stage raised it.
    pub fn config_error(&self) -> &ConfigError {
        match self {
            StartupError::Processor { source, .. } => source,
            StartupError::Broker(source) => source,
        }
    }
}
