use crate::domain::product::model::Product;

/// Which resolution strategy produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    ModelAssisted,
    KeywordMatch,
}

impl std::fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionStrategy::ModelAssisted => write!(f, "model_assisted"),
            ResolutionStrategy::KeywordMatch => write!(f, "keyword_match"),
        }
    }
}

impl std::str::FromStr for ResolutionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model_assisted" => Ok(ResolutionStrategy::ModelAssisted),
            "keyword_match" => Ok(ResolutionStrategy::KeywordMatch),
            _ => Err(format!("Invalid resolution strategy: {}", s)),
        }
    }
}

/// Ordered subset of the submitted catalog.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub products: Vec<Product>,
    pub strategy: ResolutionStrategy,
}

impl Recommendation {
    pub fn model_assisted(products: Vec<Product>) -> Self {
        Self {
            products,
            strategy: ResolutionStrategy::ModelAssisted,
        }
    }

    pub fn keyword_match(products: Vec<Product>) -> Self {
        Self {
            products,
            strategy: ResolutionStrategy::KeywordMatch,
        }
    }
}
