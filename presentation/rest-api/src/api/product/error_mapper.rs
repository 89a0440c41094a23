use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty
            | ProductError::CategoryEmpty
            | ProductError::InvalidPrice
            | ProductError::DuplicateId(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound | ProductError::Repository(_) => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
