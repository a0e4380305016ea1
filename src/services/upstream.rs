use reqwest::RequestBuilder;
use serde_json::Value;
use thiserror::Error;

/// 上游请求失败，网络错误、非 2xx 与非 JSON 响应统一视为失败
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub async fn send_json(request: RequestBuilder) -> Result<Value, UpstreamError> {
    let resp = request.send().await?.error_for_status()?;
    let body = resp.text().await?;
    let json: Value = serde_json::from_str(&body)?;
    Ok(json)
}
