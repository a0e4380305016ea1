use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::services::gold_price::GoldPriceClient;
use crate::services::preferences::PreferenceStore;
use crate::services::vdj::VdjClient;
use crate::utils::config::ServerConfig;
use crate::utils::http_client::{create_gold_client, create_vdj_client};
use crate::utils::middleware;

#[derive(Clone)]
pub struct AppState {
    pub gold: GoldPriceClient,
    /// 未启用 vdj 上游时为 None
    pub vdj: Option<VdjClient>,
    pub preferences: Arc<PreferenceStore>,
}

impl AppState {
    pub async fn from_config(cfg: &ServerConfig) -> anyhow::Result<Self> {
        let gold_client =
            create_gold_client(cfg.gold_api_headers).context("failed to build gold http client")?;
        let gold = GoldPriceClient::new(gold_client, cfg.gold_api_base.clone());

        let vdj = if cfg.vdj_enabled {
            let client = create_vdj_client().context("failed to build vdj http client")?;
            Some(VdjClient::new(client, &cfg.vdj_api_base))
        } else {
            None
        };

        let preferences = PreferenceStore::load(&cfg.preferences_path)
            .await
            .with_context(|| format!("failed to load {}", cfg.preferences_path.display()))?;
        tracing::info!("刷新间隔偏好文件: {}", preferences.path().display());

        Ok(Self {
            gold,
            vdj,
            preferences: Arc::new(preferences),
        })
    }
}

pub fn build_app(state: AppState) -> Router {
    routes::build_routes(state.vdj.clone())
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
