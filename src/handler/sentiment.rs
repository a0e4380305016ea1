use axum::{extract::State, Json};

use crate::api_models::sentiment::SentimentSummary;
use crate::api_models::ApiResponse;
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::services::sentiment::fetch_sentiment;

const SENTIMENT_FAILED: &str = "Failed to fetch sentiment data";

/// 情绪因子：国际金价现价、涨跌幅、50 点均线及偏离度
pub async fn get_sentiment(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SentimentSummary>>, AppError> {
    let summary = fetch_sentiment(&state.gold).await.map_err(|e| {
        tracing::error!("Failed to fetch sentiment data: {}", e);
        AppError::Upstream(SENTIMENT_FAILED)
    })?;
    Ok(Json(ApiResponse::ok(summary)))
}
