use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::api_models::preferences::RefreshPreferences;
use crate::api_models::ApiResponse;
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::services::preferences::PreferenceError;

pub async fn get_preferences(State(state): State<AppState>) -> Json<ApiResponse<RefreshPreferences>> {
    Json(ApiResponse::ok(state.preferences.get().await))
}

/// 修改刷新间隔并立即落盘
pub async fn update_preferences(
    State(state): State<AppState>,
    payload: Result<Json<RefreshPreferences>, JsonRejection>,
) -> Result<Json<ApiResponse<RefreshPreferences>>, AppError> {
    let Json(prefs) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let saved = state.preferences.update(prefs).await.map_err(|e| match e {
        PreferenceError::OutOfRange(_) => AppError::BadRequest(e.to_string()),
        other => {
            tracing::error!("Failed to save preferences: {}", other);
            AppError::Internal("Failed to save preferences")
        }
    })?;
    Ok(Json(ApiResponse::ok(saved)))
}
