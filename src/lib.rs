pub mod core;

pub use crate::core::adapter_resolver::{AdapterRegistry, AdapterTypeResolver};
pub use crate::core::broker::{BrokerState, MessageBroker};
pub use crate::core::component::{ManageableComponent, ManageableComponentFactory};
pub use crate::core::error::{Phase, StartupError};
pub use crate::core::processor::{ConfigProcessor, StartupPipeline};
pub use crate::core::service_processor::{ServiceConfigProcessor, ServiceProcessorConfig};
