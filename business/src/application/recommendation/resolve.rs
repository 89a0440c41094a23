use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, find_duplicate_id};
use crate::domain::recommendation::directive::{MAX_MODEL_RECOMMENDATIONS, build_prompt};
use crate::domain::recommendation::errors::{RecommendationError, UpstreamError};
use crate::domain::recommendation::keyword::keyword_match;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::response::parse_recommended_ids;
use crate::domain::recommendation::services::TextCompletionService;
use crate::domain::recommendation::use_cases::resolve::{
    ResolveRecommendationsParams, ResolveRecommendationsUseCase,
};

pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(20);

/// Turns a free-text preference into a catalog subset.
///
/// The model is asked first. Any failure on that path (transport, status,
/// timeout, unparseable answer) switches to keyword matching, so a valid
/// request always resolves.
pub struct ResolveRecommendationsUseCaseImpl {
    pub completion: Arc<dyn TextCompletionService>,
    pub logger: Arc<dyn Logger>,
    pub timeout: Duration,
}

impl ResolveRecommendationsUseCaseImpl {
    fn validate(params: &ResolveRecommendationsParams) -> Result<(), RecommendationError> {
        if params.preferences.trim().is_empty() {
            return Err(RecommendationError::PreferencesRequired);
        }
        if params.products.is_empty() {
            return Err(RecommendationError::ProductsRequired);
        }
        if let Some(id) = find_duplicate_id(&params.products) {
            return Err(RecommendationError::DuplicateProductId(id));
        }
        Ok(())
    }

    async fn model_assisted(
        &self,
        preference: &str,
        catalog: &[Product],
    ) -> Result<Vec<Product>, UpstreamError> {
        let prompt = build_prompt(preference, catalog)?;

        let raw = tokio::time::timeout(self.timeout, self.completion.complete(&prompt))
            .await
            .map_err(|_| UpstreamError::Timeout(self.timeout))??;

        let ids = parse_recommended_ids(&raw)?;
        self.logger
            .debug(&format!("Model recommended ids: {:?}", ids));

        // Catalog order wins over the order the model listed ids in.
        Ok(catalog
            .iter()
            .filter(|p| ids.contains(&p.id))
            .take(MAX_MODEL_RECOMMENDATIONS)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ResolveRecommendationsUseCase for ResolveRecommendationsUseCaseImpl {
    async fn execute(
        &self,
        params: ResolveRecommendationsParams,
    ) -> Result<Recommendation, RecommendationError> {
        Self::validate(&params)?;

        self.logger.info(&format!(
            "Resolving recommendations over {} products",
            params.products.len()
        ));

        let recommendation = match self
            .model_assisted(&params.preferences, &params.products)
            .await
        {
            Ok(products) => Recommendation::model_assisted(products),
            Err(err) => {
                self.logger.warn(&format!(
                    "Model-assisted recommendation failed ({}), using keyword matching",
                    err
                ));
                Recommendation::keyword_match(keyword_match(&params.preferences, &params.products))
            }
        };

        self.logger.info(&format!(
            "Resolved {} recommendations via {}",
            recommendation.products.len(),
            recommendation.strategy
        ));

        Ok(recommendation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{Category, ProductId};
    use crate::domain::recommendation::keyword::FALLBACK_LIMIT;
    use crate::domain::recommendation::model::ResolutionStrategy;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub Completion {}

        #[async_trait]
        impl TextCompletionService for Completion {
            async fn complete(&self, prompt: &str) -> Result<String, UpstreamError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: i64, name: &str, category: &str, price: f64, description: &str) -> Product {
        Product::from_repository(
            ProductId::new(id),
            name.to_string(),
            Category::new(category),
            price,
            format!("/images/{}.jpg", name),
            description.to_string(),
        )
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Budget Phone X1", "Phone", 299.0, "Entry-level smartphone with decent camera and battery life."),
            product(2, "Pro Phone Z5", "Phone", 799.0, "Flagship smartphone with OLED display and excellent performance."),
            product(3, "Smartwatch Lite", "Watch", 149.0, "Lightweight smartwatch with fitness tracking features."),
            product(4, "Gaming Laptop G15", "Laptop", 1200.0, "High-performance laptop suitable for gaming and heavy workloads."),
            product(5, "Everyday Laptop E3", "Laptop", 550.0, "Affordable laptop for students and office work."),
            product(6, "Wireless Earbuds", "Audio", 89.0, "Noise-cancelling wireless earbuds with long battery life."),
        ]
    }

    fn use_case(completion: MockCompletion) -> ResolveRecommendationsUseCaseImpl {
        ResolveRecommendationsUseCaseImpl {
            completion: Arc::new(completion),
            logger: mock_logger(),
            timeout: DEFAULT_COMPLETION_TIMEOUT,
        }
    }

    fn ids(recommendation: &Recommendation) -> Vec<i64> {
        recommendation.products.iter().map(|p| p.id.value()).collect()
    }

    fn params(preferences: &str) -> ResolveRecommendationsParams {
        ResolveRecommendationsParams {
            preferences: preferences.to_string(),
            products: sample_catalog(),
        }
    }

    #[tokio::test]
    async fn should_fall_back_to_keywords_when_model_unreachable() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .times(1)
            .returning(|_| Err(UpstreamError::Unavailable("connection refused".to_string())));

        let result = use_case(completion)
            .execute(params("I want a phone under $500 for gaming"))
            .await
            .unwrap();

        assert_eq!(result.strategy, ResolutionStrategy::KeywordMatch);
        // "phone" hits both phones, "gaming" and "for" hit the laptops; capped at three.
        assert_eq!(ids(&result), vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn should_reject_blank_preference_without_calling_model() {
        let mut completion = MockCompletion::new();
        completion.expect_complete().never();

        let result = use_case(completion).execute(params("   ")).await;

        assert!(matches!(
            result,
            Err(RecommendationError::PreferencesRequired)
        ));
    }

    #[tokio::test]
    async fn should_reject_empty_catalog_without_calling_model() {
        let mut completion = MockCompletion::new();
        completion.expect_complete().never();

        let result = use_case(completion)
            .execute(ResolveRecommendationsParams {
                preferences: "phone".to_string(),
                products: vec![],
            })
            .await;

        assert!(matches!(result, Err(RecommendationError::ProductsRequired)));
    }

    #[tokio::test]
    async fn should_reject_duplicate_ids_without_calling_model() {
        let mut completion = MockCompletion::new();
        completion.expect_complete().never();

        let mut products = sample_catalog();
        products.push(product(2, "Clone", "Phone", 1.0, ""));

        let result = use_case(completion)
            .execute(ResolveRecommendationsParams {
                preferences: "phone".to_string(),
                products,
            })
            .await;

        assert!(matches!(
            result,
            Err(RecommendationError::DuplicateProductId(id)) if id == ProductId::new(2)
        ));
    }

    #[tokio::test]
    async fn should_parse_fenced_model_answer_in_catalog_order() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .withf(|prompt| prompt.contains("User preferences:\nsomething for fitness"))
            .returning(|_| Ok("```json\n{\"recommendedIds\":[\"3\",\"1\"]}\n```".to_string()));

        let result = use_case(completion)
            .execute(params("something for fitness"))
            .await
            .unwrap();

        assert_eq!(result.strategy, ResolutionStrategy::ModelAssisted);
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[tokio::test]
    async fn should_drop_ids_not_in_catalog() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_| Ok(r#"{"recommendedIds": [42, 6, "99"]}"#.to_string()));

        let result = use_case(completion).execute(params("earbuds")).await.unwrap();

        assert_eq!(ids(&result), vec![6]);
    }

    #[tokio::test]
    async fn should_return_empty_without_fallback_when_model_picks_nothing() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_| Ok(r#"{"recommendedIds": []}"#.to_string()));

        let result = use_case(completion).execute(params("phone")).await.unwrap();

        assert_eq!(result.strategy, ResolutionStrategy::ModelAssisted);
        assert!(result.products.is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_without_fallback_when_field_missing() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_| Ok(r#"{"picks": [1]}"#.to_string()));

        let result = use_case(completion).execute(params("phone")).await.unwrap();

        assert_eq!(result.strategy, ResolutionStrategy::ModelAssisted);
        assert!(result.products.is_empty());
    }

    #[tokio::test]
    async fn should_fall_back_when_model_answers_prose() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_| Ok("You should buy the earbuds.".to_string()));

        let result = use_case(completion)
            .execute(params("wireless audio"))
            .await
            .unwrap();

        assert_eq!(result.strategy, ResolutionStrategy::KeywordMatch);
        assert_eq!(ids(&result), vec![6]);
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_when_no_token_matches() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_| Err(UpstreamError::Status(503)));

        let result = use_case(completion).execute(params("refrigerator")).await.unwrap();

        assert_eq!(result.strategy, ResolutionStrategy::KeywordMatch);
        assert!(result.products.is_empty());
    }

    #[tokio::test]
    async fn should_cap_model_answer_at_five() {
        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_| Ok(r#"{"recommendedIds": [1, 2, 3, 4, 5, 6]}"#.to_string()));

        let result = use_case(completion).execute(params("everything")).await.unwrap();

        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    struct SlowCompletion;

    #[async_trait]
    impl TextCompletionService for SlowCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, UpstreamError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(r#"{"recommendedIds": [1]}"#.to_string())
        }
    }

    #[tokio::test]
    async fn should_fall_back_when_model_times_out() {
        let use_case = ResolveRecommendationsUseCaseImpl {
            completion: Arc::new(SlowCompletion),
            logger: mock_logger(),
            timeout: Duration::from_millis(20),
        };

        let result = use_case.execute(params("smartwatch")).await.unwrap();

        assert_eq!(result.strategy, ResolutionStrategy::KeywordMatch);
        assert_eq!(ids(&result), vec![3]);
    }

    proptest! {
        #[test]
        fn model_answer_is_a_bounded_subset(raw_ids in proptest::collection::vec(-3i64..10, 0..12)) {
            let answer = serde_json::json!({ "recommendedIds": raw_ids }).to_string();
            let mut completion = MockCompletion::new();
            completion.expect_complete().returning(move |_| Ok(answer.clone()));

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let result = runtime
                .block_on(use_case(completion).execute(params("anything")))
                .unwrap();

            let catalog = sample_catalog();
            prop_assert!(result.products.len() <= MAX_MODEL_RECOMMENDATIONS.min(catalog.len()));
            prop_assert!(result.products.iter().all(|p| catalog.contains(p)));
            let mut seen = std::collections::HashSet::new();
            prop_assert!(result.products.iter().all(|p| seen.insert(p.id)));
        }

        #[test]
        fn fallback_answer_is_bounded(preference in "[a-z]{1,8}( [a-z]{1,8}){0,4}") {
            let mut completion = MockCompletion::new();
            completion
                .expect_complete()
                .returning(|_| Err(UpstreamError::MissingCredential));

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let result = runtime
                .block_on(use_case(completion).execute(params(&preference)))
                .unwrap();

            prop_assert_eq!(result.strategy, ResolutionStrategy::KeywordMatch);
            prop_assert!(result.products.len() <= FALLBACK_LIMIT);
        }
    }
}
