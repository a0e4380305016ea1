mod api_models;
mod app;
mod handler;
mod routes;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    utils::logging::init_logging();

    let cfg = utils::config::ServerConfig::from_env()?;
    let state = app::AppState::from_config(&cfg).await?;
    let app = app::build_app(state);

    let listener = tokio::net::TcpListener::bind(cfg.addr)
        .await
        .with_context(|| format!("bind {} failed", cfg.addr))?;
    tracing::info!(
        gold_api_headers = cfg.gold_api_headers,
        vdj_enabled = cfg.vdj_enabled,
        "Axum listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
