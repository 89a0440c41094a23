use serde::{Deserialize, Serialize};

use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::{Category, ProductId};

/// On-disk shape of a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, ProductError> {
        Product::new(NewProductProps {
            id: ProductId::new(self.id),
            name: self.name,
            category: Category::new(self.category),
            price: self.price,
            image: self.image,
            description: self.description,
        })
    }
}

impl From<&Product> for ProductEntity {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.value(),
            name: p.name.clone(),
            category: p.category.to_string(),
            price: p.price,
            image: p.image.clone(),
            description: p.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_valid_entity_into_domain() {
        let entity: ProductEntity = serde_json::from_str(
            r#"{"id": 7, "name": "Tablet T1", "category": "Tablet", "price": 329}"#,
        )
        .unwrap();

        let product = entity.into_domain().unwrap();

        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.category.as_str(), "Tablet");
        assert_eq!(product.price, 329.0);
        assert!(product.image.is_empty());
    }

    #[test]
    fn should_reject_entity_with_negative_price() {
        let entity = ProductEntity {
            id: 1,
            name: "Broken".to_string(),
            category: "Phone".to_string(),
            price: -5.0,
            image: String::new(),
            description: String::new(),
        };

        assert!(matches!(entity.into_domain(), Err(ProductError::InvalidPrice)));
    }
}
