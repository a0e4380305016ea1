use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// 失败响应统一为 `{code, msg}`，不向调用方暴露具体错误
#[derive(Debug)]
pub enum AppError {
    /// 上游请求或数据转换失败，携带该接口固定的提示语
    Upstream(&'static str),
    BadRequest(String),
    Internal(&'static str),
}

impl AppError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            AppError::Upstream(msg) | AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        (status, Json(json!({"code": status.as_u16(), "msg": msg}))).into_response()
    }
}
