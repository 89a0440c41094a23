use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use catalog::product::entity::ProductEntity;

/// The server could not be reached or answered something unusable.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("transport.request_failed: {0}")]
    Request(String),
    #[error("transport.status: {0}")]
    Status(u16),
    #[error("transport.decode_failed: {0}")]
    Decode(String),
}

/// Port to the recommendation endpoint.
///
/// `Ok(None)` means the server answered without a `recommendations` field.
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    async fn recommend(
        &self,
        preference: &str,
        catalog: &[Product],
    ) -> Result<Option<Vec<Product>>, TransportError>;
}

#[derive(Serialize)]
struct RecommendPayload<'a> {
    preferences: &'a str,
    products: Vec<ProductEntity>,
}

#[derive(Deserialize)]
struct RecommendReply {
    recommendations: Option<Vec<ProductEntity>>,
}

impl RecommendReply {
    fn into_products(self) -> Result<Option<Vec<Product>>, TransportError> {
        self.recommendations
            .map(|entities| {
                entities
                    .into_iter()
                    .map(|e| {
                        e.into_domain()
                            .map_err(|err| TransportError::Decode(err.to_string()))
                    })
                    .collect::<Result<Vec<Product>, TransportError>>()
            })
            .transpose()
    }
}

pub struct HttpRecommendationGateway {
    client: Client,
    endpoint: String,
}

impl HttpRecommendationGateway {
    pub fn new(api_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: format!("{}/api/recommend", api_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationGateway for HttpRecommendationGateway {
    async fn recommend(
        &self,
        preference: &str,
        catalog: &[Product],
    ) -> Result<Option<Vec<Product>>, TransportError> {
        let payload = RecommendPayload {
            preferences: preference,
            products: catalog.iter().map(ProductEntity::from).collect(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        let reply: RecommendReply = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        reply.into_products()
    }
}
