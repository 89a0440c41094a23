use std::time::Duration;

use business::application::recommendation::resolve::DEFAULT_COMPLETION_TIMEOUT;

/// Settings for the recommendation resolver.
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    pub timeout: Duration,
}

impl RecommendationConfig {
    /// Environment variables:
    /// - RECOMMENDATION_TIMEOUT_SECS: bound on the model call (default: 20)
    pub fn from_env() -> Self {
        let raw = std::env::var("RECOMMENDATION_TIMEOUT_SECS").ok();
        let timeout = parse_timeout(raw.as_deref()).unwrap_or_else(|| {
            if let Some(value) = &raw {
                tracing::warn!(value = %value, "Ignoring invalid RECOMMENDATION_TIMEOUT_SECS");
            }
            DEFAULT_COMPLETION_TIMEOUT
        });
        Self { timeout }
    }
}

fn parse_timeout(raw: Option<&str>) -> Option<Duration> {
    raw?.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
