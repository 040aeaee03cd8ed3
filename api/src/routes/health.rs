use actix_web::HttpResponse;
use serde_json::json;

/// Handler for GET /health
///
/// Liveness probe for load balancers and monitoring.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "tasktrack",
    }))
}
