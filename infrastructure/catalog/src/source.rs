use std::path::Path;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;

use crate::product::entity::ProductEntity;
use crate::product::repository::InMemoryCatalogRepository;
use crate::sample::sample_catalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.read_failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("catalog.parse_failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog.empty")]
    Empty,
    #[error("catalog.invalid_product: {0}")]
    InvalidProduct(#[from] ProductError),
}

/// Parses a JSON array of products, validating every entry.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let entities: Vec<ProductEntity> = serde_json::from_str(json)?;
    if entities.is_empty() {
        return Err(CatalogError::Empty);
    }
    entities
        .into_iter()
        .map(|e| e.into_domain().map_err(CatalogError::from))
        .collect()
}

/// Builds the catalog store, from `path` when given, else from the sample data.
///
/// Runs once at startup; the result is never mutated afterwards.
pub async fn load_catalog(path: Option<&Path>) -> Result<InMemoryCatalogRepository, CatalogError> {
    let products = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog from file");
            let raw = tokio::fs::read_to_string(path).await?;
            parse_catalog(&raw)?
        }
        None => {
            tracing::info!("Using built-in sample catalog");
            sample_catalog()
        }
    };

    let repository = InMemoryCatalogRepository::new(products)?;
    tracing::info!(products = repository.products().len(), "Catalog ready");
    Ok(repository)
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::ProductId;

    #[test]
    fn should_parse_catalog_array() {
        let products = parse_catalog(
            r#"[
                {"id": 1, "name": "Phone", "category": "Phone", "price": 10, "image": "/p.jpg", "description": "d"},
                {"id": 2, "name": "Watch", "category": "Watch", "price": 20.5}
            ]"#,
        )
        .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].price, 20.5);
    }

    #[test]
    fn should_reject_empty_catalog() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn should_reject_invalid_entries() {
        let result = parse_catalog(r#"[{"id": 1, "name": "", "category": "Phone", "price": 1}]"#);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidProduct(ProductError::NameEmpty))
        ));
    }

    #[test]
    fn should_reject_malformed_json() {
        assert!(matches!(parse_catalog("{not json"), Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn should_fall_back_to_sample_catalog() {
        let repository = load_catalog(None).await.unwrap();
        assert_eq!(repository.products().len(), 6);
        assert_eq!(repository.products()[0].id, ProductId::new(1));
    }

    #[tokio::test]
    async fn should_load_catalog_from_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", std::process::id()));
        tokio::fs::write(
            &path,
            r#"[{"id": 10, "name": "Tablet T1", "category": "Tablet", "price": 329}]"#,
        )
        .await
        .unwrap();

        let repository = load_catalog(Some(&path)).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(repository.products().len(), 1);
        assert_eq!(repository.products()[0].name, "Tablet T1");
    }

    #[tokio::test]
    async fn should_reject_duplicate_ids_in_file() {
        let path = std::env::temp_dir().join(format!("catalog-dup-{}.json", std::process::id()));
        tokio::fs::write(
            &path,
            r#"[{"id": 1, "name": "A", "category": "X", "price": 1},
                {"id": 1, "name": "B", "category": "X", "price": 2}]"#,
        )
        .await
        .unwrap();

        let result = load_catalog(Some(&path)).await;
        let _ = tokio::fs::remove_file(&path).await;

        assert!(matches!(
            result,
            Err(CatalogError::InvalidProduct(ProductError::DuplicateId(_)))
        ));
    }
}
