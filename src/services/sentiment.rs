use serde_json::Value;

use crate::api_models::sentiment::SentimentSummary;
use crate::services::gold_price::{GoldPriceClient, AGGREGATE_CODE};
use crate::services::upstream::UpstreamError;

/// 均线窗口，固定 50 个采样点
pub const MA_WINDOW: usize = 50;

/// 数字或数字字符串，其余情况按 0 处理
fn as_number(value: Option<&Value>) -> f64 {
    value
        .and_then(|v| v.as_f64().or_else(|| v.as_str().and_then(|s| s.trim().parse().ok())))
        .unwrap_or(0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 走势图价格序列（按时间顺序）。上游返回非 200 的 code 时视为无数据
fn chart_prices(chart: &Value) -> Vec<f64> {
    if let Some(code) = chart.get("code") {
        if code.as_i64() != Some(200) {
            return Vec::new();
        }
    }
    chart
        .get("data")
        .and_then(Value::as_array)
        .map(|points| points.iter().map(|point| as_number(point.get("p"))).collect())
        .unwrap_or_default()
}

/// 最近 `window` 个采样点的算术平均，样本不足时为 None
pub fn moving_average(prices: &[f64], window: usize) -> Option<f64> {
    if window == 0 || prices.len() < window {
        return None;
    }
    let recent = &prices[prices.len() - window..];
    Some(recent.iter().sum::<f64>() / window as f64)
}

/// 现价相对均线的偏离百分比
pub fn relative_signal(price: f64, average: f64) -> Option<f64> {
    if price <= 0.0 || average == 0.0 {
        return None;
    }
    Some((price - average) / average * 100.0)
}

pub fn summarize(quote: &Value, chart: &Value) -> SentimentSummary {
    let data = quote.get("data");
    let gold_price = as_number(data.and_then(|d| d.get("price")));
    let gold_change = as_number(data.and_then(|d| d.get("change_pct")));

    let ma50 = moving_average(&chart_prices(chart), MA_WINDOW);
    let ma_signal = ma50.and_then(|ma| relative_signal(gold_price, ma));

    SentimentSummary {
        gold_price,
        gold_change,
        ma50: ma50.map(round2),
        ma_signal: ma_signal.map(round2),
    }
}

/// 并发拉取国际金价报价与走势图，计算情绪因子
pub async fn fetch_sentiment(client: &GoldPriceClient) -> Result<SentimentSummary, UpstreamError> {
    let (quote, chart) = tokio::try_join!(
        client.fetch_quote(AGGREGATE_CODE),
        client.fetch_chart(AGGREGATE_CODE)
    )?;
    Ok(summarize(&quote, &chart))
}
