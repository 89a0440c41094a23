use std::path::PathBuf;

/// Where the catalog store is loaded from.
///
/// Environment variables:
/// - CATALOG_PATH: JSON array of products (default: built-in sample catalog)
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os("CATALOG_PATH").map(PathBuf::from),
        }
    }
}
