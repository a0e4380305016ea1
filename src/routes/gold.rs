use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::gold::{get_chart, get_gold_price, list_charts, list_gold_prices};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gold", get(list_gold_prices))
        .route("/gold/:type", get(get_gold_price))
        .route("/chart", get(list_charts))
        .route("/chart/:type", get(get_chart))
}
