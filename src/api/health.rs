use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::repository::UserRepository;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    pub database: String,
}

/// Sempre 200; `status` vira "degraded" quando o MongoDB não responde ao ping
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(repo: web::Data<dyn UserRepository>) -> impl Responder {
    let database_up = repo.ping().await;

    HttpResponse::Ok().json(HealthResponse {
        status: if database_up { "healthy" } else { "degraded" }.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        database: if database_up { "up" } else { "down" }.to_string(),
    })
}
