use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins.
///   When unset every origin is allowed, since the storefront may be served
///   from anywhere.
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type
///
pub fn init_cors() -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(allowed) => {
            let origins = parse_origins(&allowed);
            if origins.is_empty() {
                cors
            } else {
                cors.allow_origins(origins)
            }
        }
        Err(_) => cors,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}
