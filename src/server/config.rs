use super::RequestsLoggingLevel;

pub const DEFAULT_ARTIST_NAME: &str = "Daniel Caesar";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub bind_address: String,
    pub port: u16,
    /// Shown in the greeting served at `/`.
    pub artist_name: String,
}

impl ServerConfig {
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
            artist_name: DEFAULT_ARTIST_NAME.to_string(),
        }
    }
}
