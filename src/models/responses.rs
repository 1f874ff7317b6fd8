use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::domain::Recommendation;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub product_id: Value,
    pub recommendations: Vec<Recommendation>,
}

/// Response for the segment endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentResponse {
    pub success: bool,
    pub user_id: Value,
    pub segment: String,
    pub confidence: f64,
}

/// Failure envelope shared by the ML routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
