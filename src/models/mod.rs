// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Recommendation, Segment};
pub use requests::{JsonObject, RecommendationRequest, SegmentRequest, DEFAULT_LIMIT};
pub use responses::{HealthStatus, RecommendationResponse, SegmentResponse, ErrorEnvelope};
