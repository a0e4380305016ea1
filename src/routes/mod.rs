use axum::Router;

use crate::app::AppState;
use crate::services::vdj::VdjClient;

mod gold;
mod preferences;
mod root;
mod sentiment;
mod vdj;

pub fn build_routes(vdj_client: Option<VdjClient>) -> Router<AppState> {
    let mut api = root::router()
        .merge(gold::router())
        .merge(sentiment::router())
        .merge(preferences::router());

    if let Some(client) = vdj_client {
        api = api.merge(vdj::router(client));
    }

    // 业务 API 统一挂在 /api 前缀下
    Router::new().nest("/api", api)
}
