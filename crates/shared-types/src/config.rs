use serde::{Deserialize, Serialize};

/// Listener and capacity settings for the shortener service.
///
/// Read from a JSON file at startup. Every field is defaulted so that a
/// partial file only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum number of live short links held at once.
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_count() -> usize {
    10_000
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            count: default_count(),
            version: default_version(),
        }
    }
}

impl ServiceConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
