use business::domain::product::model::Product;

use crate::state::{CategoryFilter, StorefrontState};

/// One line per product: `[Category] Name  $price` with the description below.
pub fn render_products(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products found matching your criteria.".to_string();
    }

    products
        .iter()
        .map(|p| {
            format!(
                "[{}] {}  ${}\n    {}",
                p.category,
                p.name,
                format_price(p.price),
                p.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tab row with the active category in brackets. Hidden while recommending.
pub fn render_tabs(categories: &[String], state: &StorefrontState) -> Option<String> {
    if state.recommended().is_some() {
        return None;
    }
    let active = match state.category() {
        CategoryFilter::All => "All",
        CategoryFilter::Only(category) => category.as_str(),
    };
    Some(
        categories
            .iter()
            .map(|c| {
                if c == active {
                    format!("[{}]", c)
                } else {
                    c.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("  "),
    )
}

pub fn render_summary(count: usize) -> String {
    format!(
        "Found {} recommended products based on your request. Type `clear` to show all.",
        count
    )
}

/// Whole amounts print without decimals, everything else with two.
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}
