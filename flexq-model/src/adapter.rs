use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in adapter used by remoting services when nothing else is configured.
pub const JAVA_OBJECT_ADAPTER_ID: &str = "java-object";
pub const JAVA_OBJECT_ADAPTER_TYPE: &str = "flexq.adapters.JavaObjectAdapter";

/// Built-in adapter used by messaging services when nothing else is configured.
pub const ACTIONSCRIPT_ADAPTER_ID: &str = "actionscript";
pub const ACTIONSCRIPT_ADAPTER_TYPE: &str = "flexq.adapters.ActionScriptAdapter";

/// The base capability an adapter implementation provides.
///
/// A service kind only accepts adapters from its own family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdapterFamily {
    JavaObject,
    #[serde(rename = "actionscript")]
    ActionScript,
}

impl fmt::Display for AdapterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterFamily::JavaObject => f.write_str("java-object"),
            AdapterFamily::ActionScript => f.write_str("actionscript"),
        }
    }
}

/// Implementation type bound to an adapter id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterType {
    pub type_name: String,
    pub family: AdapterFamily,
}

impl AdapterType {
    pub fn new(type_name: impl Into<String>, family: AdapterFamily) -> Self {
        Self {
            type_name: type_name.into(),
            family,
        }
    }

    pub fn java_object() -> Self {
        Self::new(JAVA_OBJECT_ADAPTER_TYPE, AdapterFamily::JavaObject)
    }

    pub fn actionscript() -> Self {
        Self::new(ACTIONSCRIPT_ADAPTER_TYPE, AdapterFamily::ActionScript)
    }

    pub fn is_assignable_to(&self, family: AdapterFamily) -> bool {
        self.family == family
    }
}
