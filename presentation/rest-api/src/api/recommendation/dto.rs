use poem_openapi::{Enum, Object};

use business::domain::recommendation::model::{Recommendation, ResolutionStrategy};

use crate::api::product::dto::ProductDto;

/// Free-text preference plus the catalog snapshot to choose from.
///
/// Both fields are optional on the wire so that their absence is answered
/// with the API's own error body instead of a generic parse failure.
#[derive(Debug, Clone, Object)]
pub struct RecommendRequest {
    /// What the shopper is looking for, e.g. "a phone under $500 for gaming"
    pub preferences: Option<String>,
    /// Catalog snapshot to recommend from
    pub products: Option<Vec<ProductDto>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Enum)]
pub enum ResolutionStrategyDto {
    #[oai(rename = "model_assisted")]
    ModelAssisted,
    #[oai(rename = "keyword_match")]
    KeywordMatch,
}

impl From<ResolutionStrategy> for ResolutionStrategyDto {
    fn from(s: ResolutionStrategy) -> Self {
        match s {
            ResolutionStrategy::ModelAssisted => ResolutionStrategyDto::ModelAssisted,
            ResolutionStrategy::KeywordMatch => ResolutionStrategyDto::KeywordMatch,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecommendationResponse {
    /// Recommended products, a subset of the submitted catalog
    pub recommendations: Vec<ProductDto>,
    /// Strategy that produced the list
    pub strategy: ResolutionStrategyDto,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            recommendations: r.products.into_iter().map(|p| p.into()).collect(),
            strategy: r.strategy.into(),
        }
    }
}
