use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::product::value_objects::{Category, ProductId};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductDto;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_categories_use_case,
        }
    }
}

/// Catalog API
///
/// Read-only browsing of the product catalog.
#[OpenApi]
impl ProductApi {
    /// List catalog products
    ///
    /// Returns the catalog in its fixed order, optionally narrowed to one category.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        /// Exact category to filter by; omit or pass "All" for the whole catalog
        category: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let category = category
            .0
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
            .map(Category::new);

        match self
            .get_all_use_case
            .execute(GetAllProductsParams { category })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductDto> = products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match id.0.trim().parse::<i64>() {
            Ok(id) => ProductId::new(id),
            Err(_) => {
                return GetProductByIdResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "product.invalid_id",
                )));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::BadRequest(json),
                }
            }
        }
    }

    /// List categories
    ///
    /// Distinct categories in catalog order, for building filter tabs.
    #[oai(path = "/api/categories", method = "get", tag = "ApiTags::Products")]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_categories_use_case.execute().await {
            Ok(categories) => GetCategoriesResponse::Ok(Json(
                categories.into_iter().map(|c| c.to_string()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategoriesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductDto>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
