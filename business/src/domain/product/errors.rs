use super::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.not_found")]
    NotFound,
    #[error("product.duplicate_id")]
    DuplicateId(ProductId),
    #[error("repository.not_found")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
