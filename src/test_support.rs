use std::path::PathBuf;

use tempfile::TempDir;
use wiremock::MockServer;

use crate::app::{build_app, AppState};
use crate::utils::config::ServerConfig;

/// 没有服务监听的地址，用于不应访问上游的用例
pub const UNREACHABLE_GOLD_BASE: &str = "http://127.0.0.1:9/api.php";

pub fn gold_base(server: &MockServer) -> String {
    format!("{}/api.php", server.uri())
}

pub struct TestApp {
    gold_api_base: String,
    gold_api_headers: bool,
    vdj_api_base: Option<String>,
}

impl TestApp {
    pub fn new(gold_api_base: String) -> Self {
        Self {
            gold_api_base,
            gold_api_headers: true,
            vdj_api_base: None,
        }
    }

    pub fn with_vdj(mut self, base: String) -> Self {
        self.vdj_api_base = Some(base);
        self
    }

    pub fn without_gold_headers(mut self) -> Self {
        self.gold_api_headers = false;
        self
    }
}

pub struct RunningApp {
    pub url: String,
    pub preferences_path: PathBuf,
    _dir: TempDir,
}

/// 在随机端口上启动完整路由
pub async fn spawn_app(app: TestApp) -> RunningApp {
    let dir = tempfile::tempdir().unwrap();
    let preferences_path = dir.path().join("preferences.json");
    let cfg = ServerConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        gold_api_base: app.gold_api_base,
        gold_api_headers: app.gold_api_headers,
        vdj_enabled: app.vdj_api_base.is_some(),
        vdj_api_base: app.vdj_api_base.unwrap_or_default(),
        preferences_path: preferences_path.clone(),
    };
    let state = AppState::from_config(&cfg).await.unwrap();

    let listener = tokio::net::TcpListener::bind(cfg.addr).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_app(state)).await.unwrap();
    });

    RunningApp {
        url: format!("http://{}", addr),
        preferences_path,
        _dir: dir,
    }
}
