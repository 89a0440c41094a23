use std::sync::Arc;

use catalog::product::repository::InMemoryCatalogRepository;
use gemini::client::GeminiClient;
use gemini::text_completion::TextCompletionGemini;
use logger::TracingLogger;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_categories::GetCategoriesUseCaseImpl;
use business::application::recommendation::resolve::ResolveRecommendationsUseCaseImpl;

use crate::config::gemini_config::GeminiConfig;
use crate::config::recommendation_config::RecommendationConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub recommendation_api: crate::api::recommendation::routes::RecommendationApi,
}

impl DependencyContainer {
    pub fn new(
        catalog: InMemoryCatalogRepository,
        gemini_config: &GeminiConfig,
        recommendation_config: &RecommendationConfig,
    ) -> Self {
        let logger = Arc::new(TracingLogger::new());
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog_repository = Arc::new(catalog);

        let gemini_client = GeminiClient::new(gemini_config.api_key.clone())
            .with_model(gemini_config.model.clone())
            .with_base_url(gemini_config.base_url.clone());
        let text_completion = Arc::new(TextCompletionGemini::new(gemini_client));

        // Catalog use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            repository: catalog_repository,
            logger: logger.clone(),
        });

        // Recommendation use cases
        let resolve_use_case = Arc::new(ResolveRecommendationsUseCaseImpl {
            completion: text_completion,
            logger,
            timeout: recommendation_config.timeout,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            get_categories_use_case,
        );

        let recommendation_api =
            crate::api::recommendation::routes::RecommendationApi::new(resolve_use_case);

        Self {
            health_api,
            product_api,
            recommendation_api,
        }
    }
}
