use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recommendation::errors::RecommendationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecommendationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            RecommendationError::PreferencesRequired | RecommendationError::ProductsRequired => {
                "Both 'preferences' and 'products' are required.".to_string()
            }
            RecommendationError::DuplicateProductId(id) => {
                format!("Product id {} appears more than once in 'products'.", id)
            }
            RecommendationError::InvalidProduct(err) => {
                format!("Invalid product in 'products': {}", err)
            }
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("ValidationError", message)),
        )
    }
}
