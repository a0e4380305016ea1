use futures::future::try_join_all;
use reqwest::Client;
use serde_json::Value;

use crate::api_models::gold::ChartSeries;
use crate::services::upstream::{send_json, UpstreamError};

/// 固定的银行/产品代码顺序，聚合接口按此顺序返回
pub const GOLD_CODES: [&str; 6] = ["zs", "ms", "icbc", "cgb", "cib", "gj"];

/// 国际金价
pub const AGGREGATE_CODE: &str = "gj";

#[derive(Debug, Clone)]
pub struct GoldPriceClient {
    client: Client,
    base_url: String,
}

impl GoldPriceClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// 代码不做校验，原样透传给上游
    pub async fn fetch_quote(&self, code: &str) -> Result<Value, UpstreamError> {
        let request = self.client.get(&self.base_url).query(&[("type", code)]);
        send_json(request).await
    }

    pub async fn fetch_chart(&self, code: &str) -> Result<Value, UpstreamError> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&[("action", "chart"), ("type", code)]);
        send_json(request).await
    }
}

fn take_data(mut json: Value) -> Option<Value> {
    json.get_mut("data").map(Value::take).filter(|v| !v.is_null())
}

/// 并发拉取全部代码的报价，任一失败则整体失败；结果按 `GOLD_CODES` 顺序排列
pub async fn fetch_all_quotes(client: &GoldPriceClient) -> Result<Vec<Value>, UpstreamError> {
    let responses = try_join_all(GOLD_CODES.iter().map(|code| client.fetch_quote(code))).await?;
    Ok(responses
        .into_iter()
        .map(|json| take_data(json).unwrap_or(Value::Null))
        .collect())
}

/// 并发拉取全部代码的走势图，每项带上代码；缺失的 data 以空数组代替
pub async fn fetch_all_charts(client: &GoldPriceClient) -> Result<Vec<ChartSeries>, UpstreamError> {
    let responses = try_join_all(GOLD_CODES.iter().map(|code| client.fetch_chart(code))).await?;
    Ok(GOLD_CODES
        .iter()
        .zip(responses)
        .map(|(code, json)| ChartSeries {
            code: code.to_string(),
            data: take_data(json).unwrap_or_else(|| Value::Array(Vec::new())),
        })
        .collect())
}
