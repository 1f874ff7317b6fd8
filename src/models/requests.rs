use serde::Serialize;
use serde_json::{Map, Value};

/// A request body that parsed as a JSON object
pub type JsonObject = Map<String, Value>;

/// Result count used when `limit` is absent or not an integer
pub const DEFAULT_LIMIT: i64 = 5;

/// Request for product recommendations
///
/// Fields are kept as raw JSON: `product_id` is echoed back untouched and
/// `limit` is only a hint. Absent fields read as `null`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecommendationRequest {
    pub product_id: Value,
    pub limit: Value,
}

impl RecommendationRequest {
    pub fn limit(&self) -> i64 {
        self.limit.as_i64().unwrap_or(DEFAULT_LIMIT)
    }
}

impl From<JsonObject> for RecommendationRequest {
    fn from(mut body: JsonObject) -> Self {
        Self {
            product_id: body.remove("product_id").unwrap_or_default(),
            limit: body.remove("limit").unwrap_or_default(),
        }
    }
}

/// Request for a customer segment
#[derive(Debug, Clone, Default, Serialize)]
pub struct SegmentRequest {
    pub user_id: Value,
    pub features: Value,
}

impl From<JsonObject> for SegmentRequest {
    fn from(mut body: JsonObject) -> Self {
        Self {
            user_id: body.remove("user_id").unwrap_or_default(),
            features: body.remove("features").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_recommendation_limit_defaults_to_five() {
        let req = RecommendationRequest::from(object(json!({"product_id": "sku-123"})));
        assert_eq!(req.product_id, "sku-123");
        assert_eq!(req.limit(), 5);
    }

    #[test]
    fn test_non_integer_limit_falls_back() {
        for limit in [json!(null), json!("ten"), json!(2.5), json!([3])] {
            let req = RecommendationRequest::from(object(json!({"limit": limit})));
            assert_eq!(req.limit(), DEFAULT_LIMIT);
        }

        let req = RecommendationRequest::from(object(json!({"limit": 2})));
        assert_eq!(req.limit(), 2);
    }

    #[test]
    fn test_missing_ids_are_null() {
        let rec = RecommendationRequest::from(JsonObject::new());
        assert!(rec.product_id.is_null());

        let seg = SegmentRequest::from(object(json!({"features": {"visits": 3}})));
        assert!(seg.user_id.is_null());
        assert_eq!(seg.features["visits"], 3);
    }

    #[test]
    fn test_ids_of_any_type_are_kept() {
        let rec = RecommendationRequest::from(object(json!({"product_id": 42})));
        assert_eq!(rec.product_id, 42);

        let seg = SegmentRequest::from(object(json!({"user_id": ["a"], "features": [1, 2]})));
        assert_eq!(seg.user_id, json!(["a"]));
        assert_eq!(seg.features, json!([1, 2]));
    }
}
