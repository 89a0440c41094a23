use business::domain::product::model::Product;
use business::domain::product::value_objects::{Category, ProductId};

/// Built-in storefront catalog used when no catalog file is configured.
pub fn sample_catalog() -> Vec<Product> {
    [
        (
            1,
            "Budget Phone X1",
            "Phone",
            299.0,
            "Entry-level smartphone with decent camera and battery life.",
        ),
        (
            2,
            "Pro Phone Z5",
            "Phone",
            799.0,
            "Flagship smartphone with OLED display and excellent performance.",
        ),
        (
            3,
            "Smartwatch Lite",
            "Watch",
            149.0,
            "Lightweight smartwatch with fitness tracking features.",
        ),
        (
            4,
            "Gaming Laptop G15",
            "Laptop",
            1200.0,
            "High-performance laptop suitable for gaming and heavy workloads.",
        ),
        (
            5,
            "Everyday Laptop E3",
            "Laptop",
            550.0,
            "Affordable laptop for students and office work.",
        ),
        (
            6,
            "Wireless Earbuds",
            "Audio",
            89.0,
            "Noise-cancelling wireless earbuds with long battery life.",
        ),
    ]
    .into_iter()
    .map(|(id, name, category, price, description)| {
        Product::from_repository(
            ProductId::new(id),
            name.to_string(),
            Category::new(category),
            price,
            format!("/images/{}.jpg", name),
            description.to_string(),
        )
    })
    .collect()
}
