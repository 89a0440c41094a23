use std::env;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Storefront configuration
pub struct StorefrontConfig {
    pub api_url: String,
}

impl StorefrontConfig {
    /// Environment variables:
    /// - STOREFRONT_API_URL: base URL of the recommendation server
    ///   (default: "http://127.0.0.1:5000")
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}
