use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, find_duplicate_id};
use business::domain::product::repository::CatalogRepository;
use business::domain::product::value_objects::{Category, ProductId};

/// Immutable catalog held in memory for the lifetime of the process.
#[derive(Clone)]
pub struct InMemoryCatalogRepository {
    products: Arc<[Product]>,
}

impl InMemoryCatalogRepository {
    pub fn new(products: Vec<Product>) -> Result<Self, ProductError> {
        if let Some(id) = find_duplicate_id(&products) {
            return Err(ProductError::DuplicateId(id));
        }
        Ok(Self {
            products: products.into(),
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.to_vec())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_category(&self, category: &Category) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .products
            .iter()
            .filter(|p| &p.category == category)
            .cloned()
            .collect())
    }
}
