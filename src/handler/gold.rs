use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::api_models::gold::ChartSeries;
use crate::api_models::ApiResponse;
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::services::gold_price::{fetch_all_charts, fetch_all_quotes};

const GOLD_PRICES_FAILED: &str = "Failed to fetch gold prices";
const GOLD_PRICE_FAILED: &str = "Failed to fetch gold price";
const CHART_FAILED: &str = "Failed to fetch chart data";

/// 所有银行金价，按固定代码顺序返回
pub async fn list_gold_prices(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Value>>>, AppError> {
    let data = fetch_all_quotes(&state.gold).await.map_err(|e| {
        tracing::error!("Failed to fetch gold prices: {}", e);
        AppError::Upstream(GOLD_PRICES_FAILED)
    })?;
    Ok(Json(ApiResponse::ok(data)))
}

/// 单个银行金价，上游响应原样返回
pub async fn get_gold_price(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let data = state.gold.fetch_quote(&code).await.map_err(|e| {
        tracing::error!("Failed to fetch gold price for {}: {}", code, e);
        AppError::Upstream(GOLD_PRICE_FAILED)
    })?;
    Ok(Json(data))
}

/// 所有银行走势图
pub async fn list_charts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ChartSeries>>>, AppError> {
    let data = fetch_all_charts(&state.gold).await.map_err(|e| {
        tracing::error!("Failed to fetch chart data: {}", e);
        AppError::Upstream(CHART_FAILED)
    })?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn get_chart(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let data = state.gold.fetch_chart(&code).await.map_err(|e| {
        tracing::error!("Failed to fetch chart data for {}: {}", code, e);
        AppError::Upstream(CHART_FAILED)
    })?;
    Ok(Json(data))
}
