use crate::domain::product::model::Product;

/// Maximum number of products the keyword fallback returns.
pub const FALLBACK_LIMIT: usize = 3;

/// Tokens of this many characters or fewer carry no signal and are dropped.
const MIN_TOKEN_CHARS: usize = 2;

/// Lower-cased whitespace tokens longer than two characters.
pub fn tokenize(preference: &str) -> Vec<String> {
    preference
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Products whose searchable text contains any preference token, in catalog
/// order, truncated to [`FALLBACK_LIMIT`].
pub fn keyword_match(preference: &str, catalog: &[Product]) -> Vec<Product> {
    let tokens = tokenize(preference);
    if tokens.is_empty() {
        return vec![];
    }

    catalog
        .iter()
        .filter(|product| {
            let text = product.searchable_text();
            tokens.iter().any(|token| text.contains(token.as_str()))
        })
        .take(FALLBACK_LIMIT)
        .cloned()
        .collect()
}
