use flexq_model::{Channel, ConfigError};

/// Channels known to the broker, kept in declaration order.
#[derive(Debug, Default, Clone)]
pub struct ChannelRegistry {
    channels: Vec<Channel>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, channel: Channel) -> Result<(), ConfigError> {
        if self.contains(&channel.id) {
            return Err(ConfigError::DuplicateChannel(channel.id));
        }
        self.channels.push(channel);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.channels.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_declaration_order() {
        let mut registry = ChannelRegistry::new();
        registry.register(Channel::new("z-amf", "amf")).unwrap();
        registry.register(Channel::new("a-http", "http")).unwrap();
        registry.register(Channel::new("m-amf", "amf")).unwrap();

        assert_eq!(registry.ids().collect::<Vec<_>>(), ["z-amf", "a-http", "m-amf"]);
        assert_eq!(registry.get("a-http").map(|c| c.endpoint.as_str()), Some("http"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut registry = ChannelRegistry::new();
        registry.register(Channel::new("my-amf", "amf")).unwrap();

        let err = registry.register(Channel::new("my-amf", "http")).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateChannel(id) if id == "my-amf"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("my-amf").unwrap().endpoint, "amf");
    }
}
