//! Factory for manageable components: construct, then `initialize(name, properties)`.

use std::any::type_name;
use std::fmt;

use flexq_model::{ConfigMap, InstantiationError};
use tracing::debug;

/// Lifecycle contract shared by every component the factory can produce.
pub trait ManageableComponent {
    /// Called exactly once, right after construction.
    fn initialize(&mut self, id: &str, properties: &ConfigMap) -> Result<(), InstantiationError>;
}

type Constructor<C> = Box<dyn Fn() -> Result<C, InstantiationError>>;

/// Produces a fresh, initialized component on every request. Nothing is cached.
pub struct ManageableComponentFactory<C> {
    constructor: Constructor<C>,
    name: String,
    properties: ConfigMap,
}

impl<C> fmt::Debug for ManageableComponentFactory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManageableComponentFactory")
            .field("object_type", &type_name::<C>())
            .field("name", &self.name)
            .field("properties", &self.properties)
            .finish()
    }
}

impl<C: ManageableComponent + Default + 'static> ManageableComponentFactory<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_constructor(name, || Ok(C::default()))
    }
}

impl<C: ManageableComponent> ManageableComponentFactory<C> {
    /// For components whose construction can fail.
    pub fn with_constructor<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Result<C, InstantiationError> + 'static,
    {
        Self {
            constructor: Box::new(constructor),
            name: name.into(),
            properties: ConfigMap::new(),
        }
    }

    pub fn set_properties(&mut self, properties: ConfigMap) {
        self.properties = properties;
    }

    /// Properties as a JSON object string.
    pub fn set_properties_json(&mut self, raw: &str) -> Result<(), InstantiationError> {
        self.properties = ConfigMap::from_json(raw)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &ConfigMap {
        &self.properties
    }

    pub fn object_type(&self) -> &'static str {
        type_name::<C>()
    }

    pub fn is_singleton(&self) -> bool {
        false
    }

    pub fn get_object(&self) -> Result<C, InstantiationError> {
        let mut component = (self.constructor)()?;
        component.initialize(&self.name, &self.properties)?;
        debug!(component = %self.name, object_type = %self.object_type(), "component created");
        Ok(component)
    }
}
