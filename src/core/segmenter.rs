use crate::core::recommender::ModelError;
use crate::models::Segment;
use serde_json::Value;

/// Customer segmentation model
pub trait Segmenter: Send + Sync {
    fn segment(
        &self,
        user_id: &Value,
        features: &Value,
    ) -> Result<Segment, ModelError>;
}

/// Stand-in segmenter that labels every customer an active buyer
#[derive(Debug, Clone, Default)]
pub struct PlaceholderSegmenter;

impl Segmenter for PlaceholderSegmenter {
    fn segment(
        &self,
        user_id: &Value,
        _features: &Value,
    ) -> Result<Segment, ModelError> {
        tracing::debug!("Placeholder segment for {}", user_id);

        Ok(Segment {
            label: "active_buyer".to_string(),
            confidence: 0.87,
        })
    }
}
