use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::use_cases::resolve::{
    ResolveRecommendationsParams, ResolveRecommendationsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::{RecommendRequest, RecommendationResponse};
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    resolve_use_case: Arc<dyn ResolveRecommendationsUseCase>,
}

impl RecommendationApi {
    pub fn new(resolve_use_case: Arc<dyn ResolveRecommendationsUseCase>) -> Self {
        Self { resolve_use_case }
    }
}

/// Recommendation API
///
/// Turns a shopper's free-text preference into a subset of the submitted catalog.
#[OpenApi]
impl RecommendationApi {
    /// Recommend products
    ///
    /// Asks the language model first and falls back to keyword matching when
    /// the model cannot be used, so a valid request always gets a 200.
    #[oai(path = "/api/recommend", method = "post", tag = "ApiTags::Recommendations")]
    async fn recommend(&self, body: Json<RecommendRequest>) -> RecommendResponse {
        let RecommendRequest {
            preferences,
            products,
        } = body.0;

        let products: Result<Vec<Product>, ProductError> = products
            .unwrap_or_default()
            .into_iter()
            .map(Product::try_from)
            .collect();

        let products = match products {
            Ok(products) => products,
            Err(err) => {
                let (_, json) = RecommendationError::from(err).into_error_response();
                return RecommendResponse::BadRequest(json);
            }
        };

        let params = ResolveRecommendationsParams {
            preferences: preferences.unwrap_or_default(),
            products,
        };

        match self.resolve_use_case.execute(params).await {
            Ok(recommendation) => RecommendResponse::Ok(Json(recommendation.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                RecommendResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "bad_request_handler")]
pub enum RecommendResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

fn bad_request_handler(err: poem::Error) -> RecommendResponse {
    RecommendResponse::BadRequest(Json(ErrorResponse::new(
        "ValidationError",
        format!("Malformed request body: {}", err),
    )))
}
