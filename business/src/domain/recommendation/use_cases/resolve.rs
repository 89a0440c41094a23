use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;

pub struct ResolveRecommendationsParams {
    pub preferences: String,
    pub products: Vec<Product>,
}

#[async_trait]
pub trait ResolveRecommendationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ResolveRecommendationsParams,
    ) -> Result<Recommendation, RecommendationError>;
}
