use std::env;

const DEFAULT_PORT: &str = "5000";

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind, falling back to PORT (default: "5000")
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = resolve_port(env::var("SERVICE_PORT").ok(), env::var("PORT").ok());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

/// SERVICE_PORT wins over the platform-provided PORT; blank values are ignored.
fn resolve_port(service_port: Option<String>, port: Option<String>) -> String {
    service_port
        .into_iter()
        .chain(port)
        .map(|p| p.trim().to_string())
        .find(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
}
