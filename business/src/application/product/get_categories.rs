use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::CatalogRepository;
use crate::domain::product::use_cases::get_categories::GetCategoriesUseCase;
use crate::domain::product::value_objects::Category;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    /// Distinct categories in the order they first appear in the catalog.
    async fn execute(&self) -> Result<Vec<Category>, ProductError> {
        let products = self.repository.get_all().await?;

        let mut categories: Vec<Category> = Vec::new();
        for product in products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }

        self.logger
            .debug(&format!("Catalog has {} categories", categories.len()));
        Ok(categories)
    }
}
