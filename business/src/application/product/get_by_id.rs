use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::CatalogRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|_| ProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::{Category, ProductId};
    use mockall::mock;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn get_by_category(&self, category: &Category) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_found() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == ProductId::new(2))
            .returning(|id| {
                Ok(Product::from_repository(
                    id,
                    "Pro Phone Z5".to_string(),
                    Category::new("Phone"),
                    799.0,
                    "/images/Pro Phone Z5.jpg".to_string(),
                    "Flagship smartphone".to_string(),
                ))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(2),
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Pro Phone Z5");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(99),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
