use serde::Serialize;
use serde_json::Value;

/// 单个代码的走势图数据，`data` 为上游原始采样点
#[derive(Debug, Serialize)]
pub struct ChartSeries {
    #[serde(rename = "type")]
    pub code: String,
    pub data: Value,
}
