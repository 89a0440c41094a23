use serde::Serialize;

use crate::domain::product::model::Product;

use super::errors::UpstreamError;

/// Bumped whenever the directive text or the expected response shape changes.
pub const DIRECTIVE_VERSION: &str = "recommend-ids/v1";

/// Upper bound the model is asked to respect, also enforced on its answer.
pub const MAX_MODEL_RECOMMENDATIONS: usize = 5;

const DIRECTIVE: &str = r#"You are a product recommendation engine.

You will receive:
- A list of products
- A user preference text

Your task:
- Pick 1 - 5 products that match the user's needs
- Consider factors like category, price, and product description

Important:
- Only return valid JSON
- Format must be exactly:
  { "recommendedIds": [1, 2, 3] }"#;

#[derive(Serialize)]
struct CatalogEntry<'a> {
    id: i64,
    name: &'a str,
    category: &'a str,
    price: f64,
    image: &'a str,
    description: &'a str,
}

impl<'a> From<&'a Product> for CatalogEntry<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            id: p.id.value(),
            name: &p.name,
            category: p.category.as_str(),
            price: p.price,
            image: &p.image,
            description: &p.description,
        }
    }
}

/// Builds the single prompt sent to the model: directive, preference, catalog.
pub fn build_prompt(preference: &str, catalog: &[Product]) -> Result<String, UpstreamError> {
    let entries: Vec<CatalogEntry<'_>> = catalog.iter().map(CatalogEntry::from).collect();
    let catalog_json = serde_json::to_string_pretty(&entries)
        .map_err(|e| UpstreamError::Prompt(e.to_string()))?;

    Ok(format!(
        "{}\n\nUser preferences:\n{}\n\nProducts:\n{}\n",
        DIRECTIVE,
        preference.trim(),
        catalog_json
    ))
}
