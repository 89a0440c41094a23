use gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Configuration for Gemini API access.
///
/// A missing key is not fatal: every model call then fails fast and the
/// resolver answers from keyword matching.
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok();
        if api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set, recommendations will use keyword matching");
        }
        Self {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}
