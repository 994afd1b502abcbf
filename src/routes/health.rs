use actix_web::{web, HttpResponse, Responder};

use crate::models::{DebugInfoResponse, HealthResponse};
use crate::routes::AppState;

/// Liveness endpoint
///
/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "Healthy".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Runtime environment details
///
/// GET /api/debug/info
pub async fn debug_info(state: web::Data<AppState>) -> impl Responder {
    let machine_name = std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    HttpResponse::Ok().json(DebugInfoResponse {
        environment: state.server.environment.clone(),
        is_production: state.server.is_production(),
        is_development: state.server.is_development(),
        machine_name,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
