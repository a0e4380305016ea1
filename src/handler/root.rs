use axum::Json;

use crate::api_models::HealthResponse;

/// 健康检查，不访问上游
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
