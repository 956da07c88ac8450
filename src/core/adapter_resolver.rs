use std::collections::HashMap;

use flexq_model::{AdapterType, ResolveError};

/// Maps an adapter id to the implementation type bound to it.
pub trait AdapterTypeResolver {
    fn resolve(&self, id: &str) -> Result<AdapterType, ResolveError>;
}

impl<F> AdapterTypeResolver for F
where
    F: Fn(&str) -> Result<AdapterType, ResolveError>,
{
    fn resolve(&self, id: &str) -> Result<AdapterType, ResolveError> {
        self(id)
    }
}

/// The broker's own adapter bindings; the resolver used when none is injected.
#[derive(Debug, Default, Clone)]
pub struct AdapterRegistry {
    types: HashMap<String, AdapterType>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later bindings for the same id replace earlier ones.
    pub fn bind(&mut self, id: impl Into<String>, adapter_type: AdapterType) {
        self.types.insert(id.into(), adapter_type);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.types.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl AdapterTypeResolver for AdapterRegistry {
    fn resolve(&self, id: &str) -> Result<AdapterType, ResolveError> {
        self.types
            .get(id)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexq_model::AdapterFamily;

    #[test]
    fn registry_resolves_bound_ids_only() {
        let mut registry = AdapterRegistry::new();
        registry.bind("my-adapter", AdapterType::new("com.example.TestAdapter", AdapterFamily::JavaObject));

        let resolved = registry.resolve("my-adapter").unwrap();
        assert_eq!(resolved.type_name, "com.example.TestAdapter");
        assert_eq!(registry.resolve("other"), Err(ResolveError::NotFound("other".into())));
    }

    #[test]
    fn closures_act_as_resolvers() {
        let resolver = |id: &str| -> Result<AdapterType, ResolveError> {
            if id == "fake" {
                Ok(AdapterType::actionscript())
            } else {
                Err(ResolveError::NotFound(id.to_string()))
            }
        };

        assert_eq!(resolver.resolve("fake").unwrap().family, AdapterFamily::ActionScript);
        assert!(resolver.resolve("missing").is_err());
    }
}
