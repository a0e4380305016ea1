use reqwest::Client;
use serde_json::Value;

use crate::services::upstream::{send_json, UpstreamError};

/// gold.vdj.me 的趋势预测、全球报价与宏观指标接口，纯透传
#[derive(Debug, Clone)]
pub struct VdjClient {
    client: Client,
    base_url: String,
}

impl VdjClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_predict(&self) -> Result<Value, UpstreamError> {
        let url = format!("{}/api/predict", self.base_url);
        send_json(self.client.get(url)).await
    }

    pub async fn fetch_quotes(&self) -> Result<Value, UpstreamError> {
        let url = format!("{}/api/prices", self.base_url);
        send_json(self.client.get(url).query(&[("type", "quotes")])).await
    }

    pub async fn fetch_macro(&self) -> Result<Value, UpstreamError> {
        let url = format!("{}/api/macro", self.base_url);
        send_json(self.client.get(url)).await
    }
}
