//! FitHub ML Service - HTTP gateway for product recommendations and customer segmentation
//!
//! The models behind the gateway are placeholders for now: every route answers
//! with fixed data while the request/response surface stays stable.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    ModelError, PlaceholderRecommender, PlaceholderSegmenter, Recommender, Segmenter,
};
pub use error::ServiceError;
pub use models::{
    ErrorEnvelope, HealthStatus, RecommendationRequest, RecommendationResponse, SegmentRequest,
    SegmentResponse,
};
pub use routes::{configure_routes, AppState};
