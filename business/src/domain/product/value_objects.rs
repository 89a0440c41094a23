use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable integer identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Normalizes an id coming from loosely typed JSON.
    ///
    /// Integers, integral floats and numeric strings all map to the same id,
    /// so `3`, `3.0` and `"3"` compare equal. Anything else yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Some(Self(i));
                }
                let f = n.as_f64()?;
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Some(Self(f as i64))
                } else {
                    None
                }
            }
            Value::String(s) => s.trim().parse::<i64>().ok().map(Self),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Category tag of a product. The set is open, so this is a thin string wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_normalize_integer_ids() {
        assert_eq!(ProductId::from_json(&json!(3)), Some(ProductId::new(3)));
    }

    #[test]
    fn should_normalize_numeric_string_ids() {
        assert_eq!(ProductId::from_json(&json!("3")), Some(ProductId::new(3)));
        assert_eq!(ProductId::from_json(&json!(" 12 ")), Some(ProductId::new(12)));
    }

    #[test]
    fn should_normalize_integral_float_ids() {
        assert_eq!(ProductId::from_json(&json!(4.0)), Some(ProductId::new(4)));
    }

    #[test]
    fn should_reject_non_numeric_ids() {
        assert_eq!(ProductId::from_json(&json!("abc")), None);
        assert_eq!(ProductId::from_json(&json!(2.5)), None);
        assert_eq!(ProductId::from_json(&json!(null)), None);
        assert_eq!(ProductId::from_json(&json!([1])), None);
        assert_eq!(ProductId::from_json(&json!(true)), None);
    }

    #[test]
    fn should_display_product_id() {
        assert_eq!(format!("{}", ProductId::new(42)), "42");
    }

    #[test]
    fn should_compare_categories_for_equality() {
        let phone: Category = "Phone".into();
        assert_eq!(phone, Category::new("Phone"));
        assert_ne!(phone, Category::new("phone"));
    }
}
