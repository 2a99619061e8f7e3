//! Configuration types.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How JSON response bodies are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    #[default]
    Pretty,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub json_format: JsonFormat,
}

impl AppConfig {
    /// True for `sqlite::memory:` and `mode=memory` urls; these need a single long-lived connection.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            json_format: JsonFormat::default(),
        }
    }
}
