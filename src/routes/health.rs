use actix_web::{web, HttpResponse, Responder};
use crate::models::HealthStatus;
use crate::routes::{method_not_allowed, AppState};

/// Public API version reported by the health check
pub const API_VERSION: &str = "1.0.0";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Health check endpoint
///
/// GET /health
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "OK".to_string(),
        message: format!("{} is running", state.service_name),
        version: API_VERSION.to_string(),
    })
}
