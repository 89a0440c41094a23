use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::CatalogRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        let products = match params.category {
            Some(category) => {
                self.logger
                    .info(&format!("Fetching products in category: {}", category));
                self.repository.get_by_category(&category).await?
            }
            None => {
                self.logger.info("Fetching all products");
                self.repository.get_all().await?
            }
        };
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
