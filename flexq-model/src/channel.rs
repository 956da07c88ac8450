use serde::{Deserialize, Serialize};

/// Endpoint hints (normalized) that accept binary remoting traffic.
/// Streaming and plain HTTP endpoints never match.
const BINARY_REMOTING_ENDPOINTS: &[&str] = &["amf", "secure-amf", "amfendpoint", "secureamfendpoint"];

/// A named endpoint registered on the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,

    /// Addressing-mode hint, either a short name (`amf`, `streaming-amf`, `http`)
    /// or a dotted endpoint class name.
    pub endpoint: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Channel {
    pub fn new(id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn is_binary_remoting(&self) -> bool {
        let simple = self
            .endpoint
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        BINARY_REMOTING_ENDPOINTS.contains(&simple.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_amf_hints_are_binary_remoting() {
        assert!(Channel::new("a", "amf").is_binary_remoting());
        assert!(Channel::new("b", "SECURE-AMF").is_binary_remoting());
    }

    #[test]
    fn endpoint_class_names_are_matched_on_their_last_segment() {
        assert!(Channel::new("a", "flex.messaging.endpoints.AMFEndpoint").is_binary_remoting());
        assert!(Channel::new("b", "flex.messaging.endpoints.SecureAMFEndpoint").is_binary_remoting());
        assert!(!Channel::new("c", "flex.messaging.endpoints.StreamingAMFEndpoint").is_binary_remoting());
    }

    #[test]
    fn streaming_and_http_are_not_binary_remoting() {
        assert!(!Channel::new("a", "streaming-amf").is_binary_remoting());
        assert!(!Channel::new("b", "http").is_binary_remoting());
        assert!(!Channel::new("c", "").is_binary_remoting());
    }
}
