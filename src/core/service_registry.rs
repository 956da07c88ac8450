use std::collections::HashMap;
use std::sync::Arc;

use flexq_model::{ConfigError, Service};

/// At most one live service per service type name.
#[derive(Debug, Default)]
pub(crate) struct ServiceRegistry {
    services: HashMap<String, Arc<Service>>,
}

impl ServiceRegistry {
    pub(crate) fn register(&mut self, service: Service) -> Result<Arc<Service>, ConfigError> {
        let type_name = service.kind().type_name();
        if self.services.contains_key(type_name) {
            return Err(ConfigError::DuplicateService(type_name.to_string()));
        }
        let shared = Arc::new(service);
        self.services.insert(type_name.to_string(), Arc::clone(&shared));
        Ok(shared)
    }

    pub(crate) fn get(&self, type_name: &str) -> Option<&Arc<Service>> {
        self.services.get(type_name)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Arc<Service>> {
        self.services.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.services.len()
    }
}
