use std::time::Duration;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

/// Rejections of a malformed recommendation request. These are the only
/// errors a caller of the resolver ever sees.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.preferences_required")]
    PreferencesRequired,
    #[error("recommendation.products_required")]
    ProductsRequired,
    #[error("recommendation.duplicate_product_id")]
    DuplicateProductId(ProductId),
    #[error("recommendation.invalid_product")]
    InvalidProduct(#[from] ProductError),
}

/// Failures of the model-assisted strategy. Always recovered by the keyword
/// fallback and only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream.missing_credential")]
    MissingCredential,
    #[error("upstream.unavailable: {0}")]
    Unavailable(String),
    #[error("upstream.status: {0}")]
    Status(u16),
    #[error("upstream.empty_completion")]
    EmptyCompletion,
    #[error("upstream.malformed_response: {0}")]
    MalformedResponse(String),
    #[error("upstream.timeout after {0:?}")]
    Timeout(Duration),
    #[error("upstream.prompt: {0}")]
    Prompt(String),
}
