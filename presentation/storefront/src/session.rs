use std::sync::Arc;

use business::domain::logger::Logger;
use business::domain::product::model::Product;

use crate::gateway::RecommendationGateway;
use crate::state::{CategoryFilter, StorefrontState};

pub const FAILURE_ALERT: &str =
    "Failed to get recommendations. Make sure the server is running and your API key is set.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// Blank preference or a request already in flight; nothing was sent.
    Skipped,
    /// The server answered with this many recommendations, now on screen.
    Resolved(usize),
    /// The server answered without a recommendation list.
    Unchanged,
    /// The server could not be reached; show this alert.
    Failed(String),
}

/// One shopper's storefront: the static catalog, the screen state and the
/// way to reach the recommendation server.
pub struct Storefront {
    catalog: Vec<Product>,
    state: StorefrontState,
    gateway: Arc<dyn RecommendationGateway>,
    logger: Arc<dyn Logger>,
}

impl Storefront {
    pub fn new(
        catalog: Vec<Product>,
        gateway: Arc<dyn RecommendationGateway>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            catalog,
            state: StorefrontState::default(),
            gateway,
            logger,
        }
    }

    pub fn state(&self) -> &StorefrontState {
        &self.state
    }

    pub fn displayed(&self) -> Vec<&Product> {
        self.state.displayed(&self.catalog)
    }

    pub fn categories(&self) -> Vec<String> {
        StorefrontState::categories(&self.catalog)
    }

    pub fn select_category(&mut self, name: &str) -> bool {
        self.state.select_category(CategoryFilter::parse(name))
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Sends the preference with the full catalog and applies the answer.
    pub async fn ask(&mut self, preference: &str) -> AskOutcome {
        self.state.set_preference(preference);
        let Some(preference) = self.state.begin_request() else {
            return AskOutcome::Skipped;
        };

        self.logger
            .debug(&format!("Requesting recommendations for: {}", preference));

        match self.gateway.recommend(&preference, &self.catalog).await {
            Ok(Some(products)) => {
                let count = products.len();
                self.state.resolve(Some(products));
                self.logger
                    .info(&format!("Received {} recommendations", count));
                AskOutcome::Resolved(count)
            }
            Ok(None) => {
                self.state.resolve(None);
                self.logger.warn("Server answered without recommendations");
                AskOutcome::Unchanged
            }
            Err(err) => {
                self.logger
                    .error(&format!("Error fetching recommendations: {}", err));
                self.state.fail();
                AskOutcome::Failed(FAILURE_ALERT.to_string())
            }
        }
    }
}
