use crate::models::Recommendation;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by a model behind the gateway
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Product recommendation model
pub trait Recommender: Send + Sync {
    /// Recommend products similar to `product_id`.
    ///
    /// `product_id` is whatever JSON the caller sent. `limit` is the number of
    /// results the caller asked for; implementations are free to ignore it.
    fn recommend(
        &self,
        product_id: &Value,
        limit: i64,
    ) -> Result<Vec<Recommendation>, ModelError>;
}

/// Stand-in recommender that returns a fixed single product for every input
#[derive(Debug, Clone, Default)]
pub struct PlaceholderRecommender;

impl Recommender for PlaceholderRecommender {
    fn recommend(
        &self,
        product_id: &Value,
        limit: i64,
    ) -> Result<Vec<Recommendation>, ModelError> {
        // limit is not applied until a real model lands
        tracing::debug!("Placeholder recommend for {} (limit {})", product_id, limit);

        Ok(vec![Recommendation {
            sku: "placeholder-1".to_string(),
            name: "Recommended Product 1".to_string(),
            similarity_score: 0.95,
        }])
    }
}
