//! API configuration.

use std::time::Instant;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Allowed CORS origins. Empty or `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Bearer tokens that identify an admin.
    pub admin_tokens: Vec<String>,
    /// Bearer tokens that identify the channel owner.
    pub owner_tokens: Vec<String>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl ApiConfig {
    /// Creates a new API configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Sets the CORS origins.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Sets the admin tokens.
    pub fn with_admin_tokens(mut self, tokens: Vec<String>) -> Self {
        self.admin_tokens = tokens;
        self
    }

    /// Sets the channel owner tokens.
    pub fn with_owner_tokens(mut self, tokens: Vec<String>) -> Self {
        self.owner_tokens = tokens;
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Returns true if CORS should allow any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8765,
            cors_origins: vec!["*".to_string()],
            admin_tokens: Vec::new(),
            owner_tokens: Vec::new(),
            start_time: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8765);
        assert!(config.allows_any_origin());
        assert!(config.admin_tokens.is_empty());
    }

    #[test]
    fn test_api_config_bind_address() {
        let config = ApiConfig::new("0.0.0.0", 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_api_config_with_cors() {
        let config = ApiConfig::default().with_cors_origins(vec!["https://stream.example".into()]);
        assert!(!config.allows_any_origin());

        let config = config.with_cors_origins(Vec::new());
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_api_config_tokens() {
        let config = ApiConfig::default()
            .with_admin_tokens(vec!["a".into()])
            .with_owner_tokens(vec!["o".into()]);
        assert_eq!(config.admin_tokens, vec!["a".to_string()]);
        assert_eq!(config.owner_tokens, vec!["o".to_string()]);
    }
}
