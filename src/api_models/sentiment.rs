use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    pub gold_price: f64,
    pub gold_change: f64,
    /// 最近 50 个点的均线，样本不足时为 null
    pub ma50: Option<f64>,
    /// 现价相对 ma50 的偏离百分比
    pub ma_signal: Option<f64>,
}
