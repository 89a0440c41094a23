use std::collections::HashSet;

use super::errors::ProductError;
use super::value_objects::{Category, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub image: String,
    pub description: String,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.category.as_str().trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        if !props.price.is_finite() || props.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            category: props.category,
            price: props.price,
            image: props.image,
            description: props.description,
        })
    }

    /// Constructor for data already held by the catalog store (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        category: Category,
        price: f64,
        image: String,
        description: String,
    ) -> Self {
        Self {
            id,
            name,
            category,
            price,
            image,
            description,
        }
    }

    /// Lower-cased name, description and category, used for keyword matching.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.category).to_lowercase()
    }
}

/// Returns the first identifier that appears more than once, if any.
pub fn find_duplicate_id(products: &[Product]) -> Option<ProductId> {
    let mut seen = HashSet::with_capacity(products.len());
    products.iter().map(|p| p.id).find(|id| !seen.insert(*id))
}
