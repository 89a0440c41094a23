use super::{
    catalog_config::CatalogConfig, cors_config, gemini_config::GeminiConfig,
    recommendation_config::RecommendationConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub gemini: GeminiConfig,
    pub recommendation: RecommendationConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            gemini: GeminiConfig::from_env(),
            recommendation: RecommendationConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        }
    }
}
