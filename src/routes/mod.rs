// Route exports
pub mod health;
pub mod ml;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::{PlaceholderRecommender, PlaceholderSegmenter, Recommender, Segmenter};
use crate::error::handle_json_payload_error;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub recommender: Arc<dyn Recommender>,
    pub segmenter: Arc<dyn Segmenter>,
}

impl AppState {
    pub fn new(
        service_name: impl Into<String>,
        recommender: Arc<dyn Recommender>,
        segmenter: Arc<dyn Segmenter>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            recommender,
            segmenter,
        }
    }

    /// State backed by the placeholder models
    pub fn placeholder(service_name: impl Into<String>) -> Self {
        Self::new(
            service_name,
            Arc::new(PlaceholderRecommender),
            Arc::new(PlaceholderSegmenter),
        )
    }
}

/// Fallback for a known path hit with the wrong method
pub(crate) async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .configure(health::configure)
        .service(
            web::scope("/api/ml")
                .configure(ml::configure),
        );
}
