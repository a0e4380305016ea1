use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_GOLD_API_BASE: &str = "https://jin.20021002.xyz/api.php";
const DEFAULT_VDJ_API_BASE: &str = "https://gold.vdj.me";
const DEFAULT_PREFERENCES_PATH: &str = "./data/preferences.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// 服务启动配置，启动时读取一次后按引用传递
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub gold_api_base: String,
    /// 金价接口是否附带浏览器请求头
    pub gold_api_headers: bool,
    pub vdj_api_base: String,
    /// 是否启用 /api/vdj/* 代理
    pub vdj_enabled: bool,
    pub preferences_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };
        let addr: SocketAddr = format!("{}:{}", host.trim(), port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value: host.clone(),
            })?;

        Ok(Self {
            addr,
            gold_api_base: lookup("GOLD_API_BASE")
                .unwrap_or_else(|| DEFAULT_GOLD_API_BASE.to_string()),
            gold_api_headers: parse_flag("GOLD_API_HEADERS", lookup("GOLD_API_HEADERS"))?,
            vdj_api_base: lookup("VDJ_API_BASE")
                .unwrap_or_else(|| DEFAULT_VDJ_API_BASE.to_string()),
            vdj_enabled: parse_flag("VDJ_ENABLED", lookup("VDJ_ENABLED"))?,
            preferences_path: lookup("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_PATH)),
        })
    }
}

/// 未设置时默认开启
fn parse_flag(name: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(true);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value: raw }),
    }
}
