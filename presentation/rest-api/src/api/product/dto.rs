use poem_openapi::Object;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::{Category, ProductId};

/// Catalog product as exchanged with the storefront.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductDto {
    /// Unique, stable product identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Category tag, e.g. "Phone"
    pub category: String,
    /// Non-negative price
    pub price: f64,
    /// Image path
    #[oai(default)]
    pub image: String,
    /// Free-text description
    #[oai(default)]
    pub description: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.value(),
            name: p.name,
            category: p.category.to_string(),
            price: p.price,
            image: p.image,
            description: p.description,
        }
    }
}

impl TryFrom<ProductDto> for Product {
    type Error = ProductError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        Product::new(NewProductProps {
            id: ProductId::new(dto.id),
            name: dto.name,
            category: Category::new(dto.category),
            price: dto.price,
            image: dto.image,
            description: dto.description,
        })
    }
}
