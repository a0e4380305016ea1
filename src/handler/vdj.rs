use axum::{extract::State, Json};
use serde_json::Value;

use crate::handler::error::AppError;
use crate::services::vdj::VdjClient;

/// 趋势预测
pub async fn get_predict(State(client): State<VdjClient>) -> Result<Json<Value>, AppError> {
    let data = client.fetch_predict().await.map_err(|e| {
        tracing::error!("Failed to fetch predict data: {}", e);
        AppError::Upstream("Failed to fetch predict data")
    })?;
    Ok(Json(data))
}

/// 全球报价
pub async fn get_quotes(State(client): State<VdjClient>) -> Result<Json<Value>, AppError> {
    let data = client.fetch_quotes().await.map_err(|e| {
        tracing::error!("Failed to fetch quotes data: {}", e);
        AppError::Upstream("Failed to fetch quotes data")
    })?;
    Ok(Json(data))
}

/// 宏观指标
pub async fn get_macro(State(client): State<VdjClient>) -> Result<Json<Value>, AppError> {
    let data = client.fetch_macro().await.map_err(|e| {
        tracing::error!("Failed to fetch macro data: {}", e);
        AppError::Upstream("Failed to fetch macro data")
    })?;
    Ok(Json(data))
}
