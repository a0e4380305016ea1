use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::vdj::{get_macro, get_predict, get_quotes};
use crate::services::vdj::VdjClient;

/// vdj 代理路由自带客户端状态，未启用时整组不注册
pub fn router(client: VdjClient) -> Router<AppState> {
    Router::new()
        .route("/vdj/predict", get(get_predict))
        .route("/vdj/quotes", get(get_quotes))
        .route("/vdj/macro", get(get_macro))
        .with_state(client)
}
