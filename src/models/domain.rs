use serde::{Deserialize, Serialize};

/// A single recommended product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub sku: String,
    pub name: String,
    /// Similarity to the requested product, in [0, 1]
    pub similarity_score: f64,
}

/// Segment assignment for a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    /// Classifier confidence, in [0, 1]
    pub confidence: f64,
}
