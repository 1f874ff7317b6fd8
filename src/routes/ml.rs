use actix_web::{web, HttpResponse};
use crate::error::ServiceError;
use crate::models::{
    JsonObject, RecommendationRequest, RecommendationResponse, SegmentRequest, SegmentResponse,
};
use crate::routes::{method_not_allowed, AppState};

/// Configure the ML routes (mounted under /api/ml)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/recommend")
            .route(web::post().to(recommend))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/segment")
            .route(web::post().to(segment))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Product recommendations
///
/// POST /api/ml/recommend
///
/// Request body:
/// ```json
/// { "product_id": "sku-123", "limit": 5 }
/// ```
///
/// Any JSON object is accepted; fields of unexpected type are passed through.
async fn recommend(
    state: web::Data<AppState>,
    body: web::Json<JsonObject>,
) -> Result<HttpResponse, ServiceError> {
    let req = RecommendationRequest::from(body.into_inner());
    let limit = req.limit();

    tracing::info!("Recommending for product: {}, limit: {}", req.product_id, limit);

    let recommendations = state
        .recommender
        .recommend(&req.product_id, limit)
        .map_err(|e| {
            tracing::warn!("Recommender failed for {}: {}", req.product_id, e);
            e
        })?;

    Ok(HttpResponse::Ok().json(RecommendationResponse {
        success: true,
        product_id: req.product_id,
        recommendations,
    }))
}

/// Customer segment
///
/// POST /api/ml/segment
///
/// Request body:
/// ```json
/// { "user_id": "user-123", "features": {} }
/// ```
async fn segment(
    state: web::Data<AppState>,
    body: web::Json<JsonObject>,
) -> Result<HttpResponse, ServiceError> {
    let req = SegmentRequest::from(body.into_inner());

    tracing::info!("Segmenting user: {}", req.user_id);

    let segment = state
        .segmenter
        .segment(&req.user_id, &req.features)
        .map_err(|e| {
            tracing::warn!("Segmenter failed for {}: {}", req.user_id, e);
            e
        })?;

    Ok(HttpResponse::Ok().json(SegmentResponse {
        success: true,
        user_id: req.user_id,
        segment: segment.label,
        confidence: segment.confidence,
    }))
}
