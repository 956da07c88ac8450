use flexq_model::ConfigError;
use tracing::{debug, info};

use crate::core::broker::MessageBroker;
use crate::core::error::{Phase, StartupError};

/// Startup hook run around the broker's own startup.
///
/// Both phases take the broker by value and hand it back, so a processor
/// that fails simply drops it and startup ends there.
pub trait ConfigProcessor {
    fn name(&self) -> &str;

    fn process_before_startup(&self, broker: MessageBroker) -> Result<MessageBroker, ConfigError>;

    fn process_after_startup(&self, broker: MessageBroker) -> Result<MessageBroker, ConfigError>;
}

/// Ordered set of processors applied to a single broker startup.
#[derive(Default)]
pub struct StartupPipeline {
    processors: Vec<Box<dyn ConfigProcessor>>,
}

impl StartupPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processor(mut self, processor: impl ConfigProcessor + 'static) -> Self {
        self.add(processor);
        self
    }

    pub fn add(&mut self, processor: impl ConfigProcessor + 'static) {
        self.processors.push(Box::new(processor));
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// before-phase of every processor in registration order, then
    /// [`MessageBroker::start`], then every after-phase in the same order.
    pub fn run(&self, mut broker: MessageBroker) -> Result<MessageBroker, StartupError> {
        info!(broker = %broker.id(), processors = self.processors.len(), "starting broker");

        for processor in &self.processors {
            debug!(processor = %processor.name(), "process before startup");
            broker = processor
                .process_before_startup(broker)
                .map_err(|source| StartupError::Processor {
                    processor: processor.name().to_string(),
                    phase: Phase::BeforeStartup,
                    source,
                })?;
        }

        broker.start()?;

        for processor in &self.processors {
            debug!(processor = %processor.name(), "process after startup");
            broker = processor
                .process_after_startup(broker)
                .map_err(|source| StartupError::Processor {
                    processor: processor.name().to_string(),
                    phase: Phase::AfterStartup,
                    source,
                })?;
        }

        Ok(broker)
    }
}
